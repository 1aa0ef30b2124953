use crate::model::{EmployeeId, ShiftId};
use crate::planner::{PlanError, PlanOptions, Planner};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Gabarit de semaine type : créneaux récurrents par poste et jour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl WeekTemplate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("template id cannot be empty");
        }
        if self.name.trim().is_empty() {
            bail!("template name cannot be empty");
        }
        if self.slots.is_empty() {
            bail!("template must contain at least one slot");
        }
        for slot in &self.slots {
            slot.validate()?;
        }
        validate_slot_overlaps(&self.slots)?;
        Ok(())
    }
}

/// Créneau récurrent. `days` : 1 = lundi … 7 = dimanche.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub position: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub break_minutes: u32,
    pub days: Vec<u8>,
}

impl Slot {
    fn validate(&self) -> Result<()> {
        if self.position.trim().is_empty() {
            bail!("slot position cannot be empty");
        }
        if self.days.is_empty() {
            bail!("slot must define at least one day");
        }
        if self.days.iter().any(|d| *d == 0 || *d > 7) {
            bail!("slot days must be within 1..=7");
        }
        // Pas de créneau à cheval sur minuit.
        if self.end_time <= self.start_time {
            bail!("slot end_time must be after start_time");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub template: WeekTemplate,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
}

/// Gestion simple des gabarits persistés sur disque.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    base_dir: PathBuf,
}

impl TemplateStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            base_dir: dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("creating template directory {}", self.base_dir.display()))
    }

    pub fn save(&self, template: &WeekTemplate) -> Result<PathBuf> {
        template.validate()?;
        self.ensure_dir()?;
        let path = self.base_dir.join(format!("{}.json", template.id));
        let json = serde_json::to_string_pretty(template)?;
        fs::write(&path, json).with_context(|| format!("writing template {}", path.display()))?;
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<WeekTemplate> {
        let path = self.base_dir.join(format!("{}.json", id));
        let data =
            fs::read(&path).with_context(|| format!("reading template {}", path.display()))?;
        let template: WeekTemplate = serde_json::from_slice(&data)
            .with_context(|| format!("parsing template {}", path.display()))?;
        template.validate()?;
        Ok(template)
    }

    pub fn list(&self) -> Result<Vec<TemplateInfo>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }
        let mut infos = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)?;
            let template: WeekTemplate = match serde_json::from_slice(&data) {
                Ok(t) => t,
                Err(err) => {
                    eprintln!(
                        "Warning: could not parse template {}: {err}",
                        path.display()
                    );
                    continue;
                }
            };
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            infos.push(TemplateInfo {
                template,
                path,
                modified,
            });
        }
        infos.sort_by(|a, b| a.template.id.cmp(&b.template.id));
        Ok(infos)
    }
}

/// Résultat d'application d'un gabarit sur une période.
#[derive(Debug, Clone, Default)]
pub struct ApplyOutcome {
    pub created: Vec<ShiftId>,
    /// Créneaux refusés par le moteur de règles (conflit), avec le message.
    pub skipped: Vec<String>,
}

/// Applique un gabarit jour par jour pour un employé, chaque créneau passant
/// par le contrôle de conflits ; les créneaux en conflit sont ignorés et
/// comptés, les autres erreurs remontent.
pub fn apply_template(
    planner: &mut Planner,
    template: &WeekTemplate,
    employee: &EmployeeId,
    from: NaiveDate,
    to: NaiveDate,
    opts: PlanOptions,
) -> Result<ApplyOutcome> {
    template.validate()?;
    if to < from {
        bail!("end date must not precede start date");
    }

    let mut outcome = ApplyOutcome::default();
    let mut current = from;

    while current <= to {
        let weekday = current.weekday().number_from_monday() as u8;
        for slot in template.slots.iter().filter(|s| s.days.contains(&weekday)) {
            match planner.create_shift(
                employee,
                current,
                slot.start_time,
                slot.end_time,
                &slot.position,
                slot.break_minutes,
                opts,
            ) {
                Ok(id) => outcome.created.push(id),
                Err(PlanError::Conflict(message)) => outcome.skipped.push(message),
                Err(err) => return Err(err.into()),
            }
        }
        current = current.succ_opt().context("date overflow")?;
    }

    Ok(outcome)
}

pub fn load_template_from_file<P: AsRef<Path>>(path: P) -> Result<WeekTemplate> {
    let data = fs::read(&path)?;
    let template: WeekTemplate = serde_json::from_slice(&data)?;
    template.validate()?;
    Ok(template)
}

fn validate_slot_overlaps(slots: &[Slot]) -> Result<()> {
    for (i, slot_a) in slots.iter().enumerate() {
        for slot_b in slots.iter().skip(i + 1) {
            if slot_a.position != slot_b.position {
                continue;
            }
            if slot_overlap(slot_a, slot_b) {
                bail!(
                    "template contains overlapping slots for position {}",
                    slot_a.position
                );
            }
        }
    }
    Ok(())
}

fn slot_overlap(a: &Slot, b: &Slot) -> bool {
    let shared_days = a.days.iter().any(|da| b.days.contains(da));
    if !shared_days {
        return false;
    }
    a.start_time < b.end_time && b.start_time < a.end_time
}
