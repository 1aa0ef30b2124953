use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membre de l'équipe planifiable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub handle: String,
    pub display_name: String,
    #[serde(default)]
    pub position: String,
}

impl Employee {
    pub fn new<H: Into<String>, D: Into<String>>(handle: H, display_name: D) -> Self {
        Self {
            id: EmployeeId::random(),
            handle: handle.into(),
            display_name: display_name.into(),
            position: String::new(),
        }
    }
}

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Statut d'un shift ; l'annulation tient lieu de suppression douce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Scheduled,
    Cancelled,
}

/// Créneau de travail d'un employé sur un jour calendaire.
///
/// Intervalle `[start, end)` en heure locale du planning, sans passage de
/// minuit (`end > start` exigé à la construction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub employee: EmployeeId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub position: String,
    #[serde(default)]
    pub break_minutes: u32,
    pub status: ShiftStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Shift {
    /// Crée un shift en validant que `end > start`.
    pub fn new(
        employee: EmployeeId,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        position: String,
        break_minutes: u32,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            id: ShiftId::random(),
            employee,
            date,
            start,
            end,
            position,
            break_minutes,
            status: ShiftStatus::Scheduled,
            notes: None,
        })
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == ShiftStatus::Scheduled
    }

    /// Durée brute en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Heures nettes (pauses déduites), plancher à 0.
    pub fn net_hours(&self) -> f64 {
        let minutes = self.duration_minutes() - i64::from(self.break_minutes);
        (minutes.max(0) as f64) / 60.0
    }
}

/// Identifiant fort pour Absence
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbsenceId(String);

impl AbsenceId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    Vacation,
    Sick,
    Training,
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    Pending,
    Approved,
    Rejected,
}

/// Période d'absence d'un employé (intervalle de jours inclusif).
///
/// Cycle de vie : demandée (pending) puis approuvée ou rejetée par un
/// responsable ; l'approbation annule les shifts couverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Absence {
    pub id: AbsenceId,
    pub employee: EmployeeId,
    pub kind: AbsenceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: AbsenceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impacted_shifts: Vec<ShiftId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<EmployeeId>,
}

impl Absence {
    pub fn new(
        employee: EmployeeId,
        kind: AbsenceType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, String> {
        if end_date < start_date {
            return Err("absence end date must not precede start date".to_string());
        }
        Ok(Self {
            id: AbsenceId::random(),
            employee,
            kind,
            start_date,
            end_date,
            status: AbsenceStatus::Pending,
            impacted_shifts: Vec::new(),
            decided_by: None,
        })
    }

    /// Le jour donné tombe-t-il dans la période (bornes incluses) ?
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Instantané complet du planning
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Plan {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
    pub absences: Vec<Absence>,
}

impl Plan {
    pub fn find_employee_by_handle<'a>(&'a self, handle: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.handle == handle)
    }
    pub fn find_employee_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
    pub fn find_shift<'a>(&'a self, id: &ShiftId) -> Option<&'a Shift> {
        self.shifts.iter().find(|s| &s.id == id)
    }
    pub fn find_shift_mut(&mut self, id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == id)
    }
    pub fn find_absence_mut(&mut self, id: &AbsenceId) -> Option<&mut Absence> {
        self.absences.iter_mut().find(|a| &a.id == id)
    }

    /// Shifts actifs d'un employé pour un jour donné.
    pub fn shifts_on<'a>(&'a self, employee: &EmployeeId, date: NaiveDate) -> Vec<&'a Shift> {
        self.shifts
            .iter()
            .filter(|s| &s.employee == employee && s.date == date && s.is_scheduled())
            .collect()
    }

    /// Absences approuvées d'un employé.
    pub fn approved_absences<'a>(&'a self, employee: &EmployeeId) -> Vec<&'a Absence> {
        self.absences
            .iter()
            .filter(|a| &a.employee == employee && a.status == AbsenceStatus::Approved)
            .collect()
    }
}
