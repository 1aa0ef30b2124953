//! Moteur de règles de conflits (chevauchement, absence approuvée, repos).
//!
//! Vérification purement en mémoire sur des instantanés passés explicitement :
//! aucune lecture d'état partagé. C'est un pré-contrôle consultatif côté
//! client ; deux écrivains concurrents peuvent tous deux passer le contrôle,
//! seule une contrainte transactionnelle côté serveur garantirait l'unicité.

use super::{util, Conflict, ConflictKind, ConflictSource, PlanOptions, Planner};
use crate::model::{Absence, AbsenceStatus, Shift};
use chrono::Days;

/// Évalue un shift candidat contre les shifts du même jour, les absences de
/// l'employé et les shifts de la veille. Retourne la liste des violations,
/// vide quand la proposition est acceptable.
///
/// - Chevauchement : intervalles `[start, end)` en minutes depuis minuit,
///   conflit ssi `s1 < e2 && e1 > s2`. Le shift en cours d'édition (même id)
///   est exclu de la comparaison.
/// - Absence : le jour du candidat ne doit tomber dans aucune absence
///   approuvée. Une absence en attente ou rejetée ne bloque jamais.
/// - Repos : `(24h - fin de veille) + début du candidat`, en heures
///   fractionnaires ; conflit strictement sous `min_rest_hours`.
pub fn check_conflicts(
    candidate: &Shift,
    same_day: &[&Shift],
    absences: &[&Absence],
    previous_day: &[&Shift],
    opts: PlanOptions,
) -> Vec<Conflict> {
    let mut out = Vec::new();

    for other in same_day {
        if other.id == candidate.id || !other.is_scheduled() {
            continue;
        }
        if util::overlaps(candidate.start, candidate.end, other.start, other.end) {
            out.push(Conflict {
                employee: candidate.employee.clone(),
                kind: ConflictKind::Overlap,
                source: ConflictSource::Shift(other.id.clone()),
                message: format!(
                    "overlaps shift {} ({}-{})",
                    other.id.as_str(),
                    other.start.format("%H:%M"),
                    other.end.format("%H:%M"),
                ),
            });
        }
    }

    for absence in absences {
        if absence.status != AbsenceStatus::Approved {
            continue;
        }
        if absence.covers(candidate.date) {
            out.push(Conflict {
                employee: candidate.employee.clone(),
                kind: ConflictKind::Absence,
                source: ConflictSource::Absence(absence.id.clone()),
                message: format!(
                    "date {} falls within approved absence {} ({} to {})",
                    candidate.date,
                    absence.id.as_str(),
                    absence.start_date,
                    absence.end_date,
                ),
            });
        }
    }

    // Dernier shift de la veille, par heure de début.
    let prev_last = previous_day
        .iter()
        .filter(|s| s.is_scheduled())
        .max_by_key(|s| s.start);
    if let Some(prev) = prev_last {
        let rest_min = util::rest_minutes(prev.end, candidate.start);
        if rest_min < i64::from(opts.min_rest_hours) * 60 {
            out.push(Conflict {
                employee: candidate.employee.clone(),
                kind: ConflictKind::RestTime,
                source: ConflictSource::Shift(prev.id.clone()),
                message: format!(
                    "only {:.1}h of rest after shift {} ending {} (minimum {}h)",
                    rest_min as f64 / 60.0,
                    prev.id.as_str(),
                    prev.end.format("%H:%M"),
                    opts.min_rest_hours,
                ),
            });
        }
    }

    out
}

/// Balayage complet du plan : chevauchements par employé et par jour,
/// absences approuvées, repos entre jours adjacents.
pub(super) fn detect_conflicts(planner: &Planner, opts: PlanOptions) -> Vec<Conflict> {
    let mut out = Vec::new();
    let plan = planner.plan();

    for employee in plan.employees.iter() {
        let mut shifts: Vec<&Shift> = plan
            .shifts
            .iter()
            .filter(|s| s.employee == employee.id && s.is_scheduled())
            .collect();
        shifts.sort_by_key(|s| (s.date, s.start));

        for (idx, a) in shifts.iter().enumerate() {
            for b in shifts.iter().skip(idx + 1) {
                if a.date != b.date {
                    continue;
                }
                if util::overlaps(a.start, a.end, b.start, b.end) {
                    out.push(Conflict {
                        employee: employee.id.clone(),
                        kind: ConflictKind::Overlap,
                        source: ConflictSource::Shift(b.id.clone()),
                        message: format!(
                            "shift {} overlaps shift {} on {}",
                            a.id.as_str(),
                            b.id.as_str(),
                            a.date,
                        ),
                    });
                }
            }
        }

        for shift in shifts.iter() {
            for absence in plan.absences.iter() {
                if absence.employee != employee.id
                    || absence.status != AbsenceStatus::Approved
                    || !absence.covers(shift.date)
                {
                    continue;
                }
                out.push(Conflict {
                    employee: employee.id.clone(),
                    kind: ConflictKind::Absence,
                    source: ConflictSource::Absence(absence.id.clone()),
                    message: format!(
                        "shift {} on {} falls within approved absence {}",
                        shift.id.as_str(),
                        shift.date,
                        absence.id.as_str(),
                    ),
                });
            }
        }

        for (idx, first) in shifts.iter().enumerate() {
            let Some(prev_date) = first.date.checked_sub_days(Days::new(1)) else {
                continue;
            };
            // Premier shift du jour uniquement : la règle compare la fin de
            // veille au début de journée.
            if shifts[..idx].iter().any(|s| s.date == first.date) {
                continue;
            }
            let prev_last = shifts
                .iter()
                .filter(|s| s.date == prev_date)
                .max_by_key(|s| s.start);
            if let Some(prev) = prev_last {
                let rest_min = util::rest_minutes(prev.end, first.start);
                if rest_min < i64::from(opts.min_rest_hours) * 60 {
                    out.push(Conflict {
                        employee: employee.id.clone(),
                        kind: ConflictKind::RestTime,
                        source: ConflictSource::Shift(prev.id.clone()),
                        message: format!(
                            "only {:.1}h of rest between {} and {}",
                            rest_min as f64 / 60.0,
                            prev.id.as_str(),
                            first.id.as_str(),
                        ),
                    });
                }
            }
        }
    }

    out
}
