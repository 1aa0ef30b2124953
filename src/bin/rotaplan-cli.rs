#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use rotaplan::{
    badge::{default_badges, unlocked, EmployeeStats},
    io,
    model::{AbsenceId, AbsenceType, ShiftId},
    planner::{ConflictKind, PlanOptions, Planner},
    session::{FixedSession, IdentityProvider},
    storage::{JsonStorage, Storage},
    template::{apply_template, TemplateStore},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification d'équipe (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    /// Handle de l'utilisateur courant (pour les décisions d'absence)
    #[arg(long = "as", global = true)]
    actor: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Importer des shifts depuis un CSV (contrôle de conflits inclus)
    ImportShifts {
        #[arg(long)]
        csv: String,
        #[arg(long, default_value_t = 11)]
        min_rest_hours: u32,
    },

    /// Créer un shift
    CreateShift {
        #[arg(long)]
        employee: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM
        #[arg(long)]
        end: String,
        #[arg(long)]
        position: String,
        #[arg(long, default_value_t = 0)]
        break_minutes: u32,
        #[arg(long, default_value_t = 11)]
        min_rest_hours: u32,
    },

    /// Annuler un shift (suppression douce)
    CancelShift {
        #[arg(long)]
        shift_id: String,
    },

    /// Demander une absence
    RequestAbsence {
        #[arg(long)]
        employee: String,
        /// vacation | sick | training | autre libellé
        #[arg(long, default_value = "vacation")]
        kind: String,
        /// YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// YYYY-MM-DD
        #[arg(long)]
        to: String,
    },

    /// Approuver une absence (annule les shifts couverts)
    Approve {
        #[arg(long)]
        absence_id: String,
    },

    /// Rejeter une absence
    Reject {
        #[arg(long)]
        absence_id: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier les conflits du plan
    Check {
        #[arg(long, default_value_t = 11)]
        min_rest_hours: u32,
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Statistiques hebdomadaires
    Stats,

    /// Appliquer un gabarit de semaine à un employé sur une période
    ApplyTemplate {
        #[arg(long, default_value = "templates")]
        dir: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        employee: String,
        /// YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// YYYY-MM-DD
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 11)]
        min_rest_hours: u32,
    },

    /// Badges débloqués par un employé
    Badges {
        #[arg(long)]
        employee: String,
    },
}

fn parse_absence_kind(raw: &str) -> AbsenceType {
    match raw.to_ascii_lowercase().as_str() {
        "vacation" | "congés" | "conges" => AbsenceType::Vacation,
        "sick" | "maladie" => AbsenceType::Sick,
        "training" | "formation" => AbsenceType::Training,
        other => AbsenceType::Other(other.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut planner = Planner::new();
    *planner.plan_mut() = storage.load_or_default()?;

    let session = FixedSession::new(
        cli.actor
            .as_deref()
            .and_then(|h| planner.plan().find_employee_by_handle(h))
            .map(|e| e.id.clone()),
    );

    let code = match cli.cmd {
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(csv)?;
            planner.add_employees(employees);
            storage.save(planner.plan())?;
            0
        }
        Commands::ImportShifts {
            csv,
            min_rest_hours,
        } => {
            let opts = PlanOptions { min_rest_hours };
            let shifts = io::import_shifts_csv(csv, planner.plan())?;
            for shift in shifts {
                planner.create_shift(
                    &shift.employee,
                    shift.date,
                    shift.start,
                    shift.end,
                    &shift.position,
                    shift.break_minutes,
                    opts,
                )?;
            }
            storage.save(planner.plan())?;
            0
        }
        Commands::CreateShift {
            employee,
            date,
            start,
            end,
            position,
            break_minutes,
            min_rest_hours,
        } => {
            let employee_id = planner
                .plan()
                .find_employee_by_handle(&employee)
                .map(|e| e.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown employee: {}", employee))?;
            let date = io::parse_date(&date)?;
            let start = io::parse_time(&start)?;
            let end = io::parse_time(&end)?;
            let opts = PlanOptions { min_rest_hours };
            let id = planner.create_shift(
                &employee_id,
                date,
                start,
                end,
                &position,
                break_minutes,
                opts,
            )?;
            storage.save(planner.plan())?;
            println!("created shift {}", id.as_str());
            0
        }
        Commands::CancelShift { shift_id } => {
            planner.cancel_shift(&ShiftId::new(shift_id))?;
            storage.save(planner.plan())?;
            0
        }
        Commands::RequestAbsence {
            employee,
            kind,
            from,
            to,
        } => {
            let employee_id = planner
                .plan()
                .find_employee_by_handle(&employee)
                .map(|e| e.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown employee: {}", employee))?;
            let from = io::parse_date(&from)?;
            let to = io::parse_date(&to)?;
            let id = planner.request_absence(&employee_id, parse_absence_kind(&kind), from, to)?;
            storage.save(planner.plan())?;
            println!("requested absence {}", id.as_str());
            0
        }
        Commands::Approve { absence_id } => {
            let impacted =
                planner.approve_absence(&AbsenceId::new(absence_id), session.current_user())?;
            storage.save(planner.plan())?;
            println!("approved; {} shift(s) cancelled", impacted.len());
            0
        }
        Commands::Reject { absence_id } => {
            planner.reject_absence(&AbsenceId::new(absence_id), session.current_user())?;
            storage.save(planner.plan())?;
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_plan_json(path, planner.plan())?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, planner.plan())?;
            }
            // impression compacte
            for s in &planner.plan().shifts {
                let handle = planner
                    .plan()
                    .find_employee_by_id(&s.employee)
                    .map(|e| e.handle.as_str())
                    .unwrap_or("-");
                println!(
                    "{} | {} {} → {} | {} | {}",
                    s.id.as_str(),
                    s.date,
                    s.start.format("%H:%M"),
                    s.end.format("%H:%M"),
                    s.position,
                    handle,
                );
            }
            0
        }
        Commands::Check {
            min_rest_hours,
            report,
        } => {
            let opts = PlanOptions { min_rest_hours };
            let conflicts = planner.detect_conflicts(opts);
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["employee_id", "kind", "message"])?;
                    for c in &conflicts {
                        w.write_record([
                            c.employee.as_str(),
                            match c.kind {
                                ConflictKind::Overlap => "overlap",
                                ConflictKind::Absence => "absence",
                                ConflictKind::RestTime => "rest_time",
                            },
                            c.message.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Stats => {
            let stats = planner.weekly_stats();
            println!(
                "total: {} shift(s), {:.1}h",
                stats.total_shifts, stats.total_hours
            );
            for (employee, totals) in &stats.by_employee {
                let handle = planner
                    .plan()
                    .find_employee_by_id(employee)
                    .map(|e| e.handle.as_str())
                    .unwrap_or("-");
                println!("  {handle}: {} shift(s), {:.1}h", totals.shifts, totals.hours);
            }
            for (position, totals) in &stats.by_position {
                println!(
                    "  [{position}]: {} shift(s), {:.1}h",
                    totals.shifts, totals.hours
                );
            }
            for (date, count) in &stats.by_day {
                println!("  {date}: {count} employee(s)");
            }
            0
        }
        Commands::ApplyTemplate {
            dir,
            id,
            employee,
            from,
            to,
            min_rest_hours,
        } => {
            let employee_id = planner
                .plan()
                .find_employee_by_handle(&employee)
                .map(|e| e.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown employee: {}", employee))?;
            let from = io::parse_date(&from)?;
            let to = io::parse_date(&to)?;
            let store = TemplateStore::new(dir);
            let template = store.load(&id)?;
            let opts = PlanOptions { min_rest_hours };
            let outcome = apply_template(&mut planner, &template, &employee_id, from, to, opts)?;
            storage.save(planner.plan())?;
            println!(
                "created {} shift(s), skipped {} (conflicts)",
                outcome.created.len(),
                outcome.skipped.len()
            );
            0
        }
        Commands::Badges { employee } => {
            let employee_id = planner
                .plan()
                .find_employee_by_handle(&employee)
                .map(|e| e.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown employee: {}", employee))?;
            let stats = EmployeeStats::collect(planner.plan(), &employee_id);
            let badges = default_badges();
            let earned = unlocked(&badges, &stats);
            if earned.is_empty() {
                println!("no badge unlocked");
            }
            for badge in earned {
                println!("{} | {}", badge.id, badge.name);
            }
            0
        }
    };

    std::process::exit(code);
}
