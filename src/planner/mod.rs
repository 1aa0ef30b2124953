mod conflicts;
mod mutate;
mod stats;
mod types;
mod util;

pub use conflicts::check_conflicts;
pub use stats::{weekly_stats, Totals, WeeklyStats};
pub use types::{Conflict, ConflictKind, ConflictSource, PlanError, PlanOptions};

use crate::model::{AbsenceId, AbsenceType, Employee, EmployeeId, Plan, Shift, ShiftId};
use chrono::{Days, NaiveDate, NaiveTime};

/// Planner : encapsule un Plan en cours de construction
#[derive(Debug, Default)]
pub struct Planner {
    plan: Plan,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            plan: Plan::default(),
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }
    pub fn plan_mut(&mut self) -> &mut Plan {
        &mut self.plan
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        self.plan.employees.extend(employees);
    }

    /// Crée un shift après passage par le moteur de règles ; la première
    /// violation rencontrée fait échouer l'écriture.
    #[allow(clippy::too_many_arguments)]
    pub fn create_shift(
        &mut self,
        employee: &EmployeeId,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        position: &str,
        break_minutes: u32,
        opts: PlanOptions,
    ) -> Result<ShiftId, PlanError> {
        mutate::create_shift(self, employee, date, start, end, position, break_minutes, opts)
    }

    /// Modifie les horaires d'un shift existant, recontrôle inclus.
    pub fn update_shift_time(
        &mut self,
        shift_id: &ShiftId,
        start: NaiveTime,
        end: NaiveTime,
        opts: PlanOptions,
    ) -> Result<(), PlanError> {
        mutate::update_shift_time(self, shift_id, start, end, opts)
    }

    pub fn cancel_shift(&mut self, shift_id: &ShiftId) -> Result<(), PlanError> {
        mutate::cancel_shift(self, shift_id)
    }

    pub fn remove_shift(&mut self, shift_id: &ShiftId) -> Result<(), PlanError> {
        mutate::remove_shift(self, shift_id)
    }

    pub fn request_absence(
        &mut self,
        employee: &EmployeeId,
        kind: AbsenceType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AbsenceId, PlanError> {
        mutate::request_absence(self, employee, kind, start_date, end_date)
    }

    pub fn approve_absence(
        &mut self,
        absence_id: &AbsenceId,
        decided_by: Option<EmployeeId>,
    ) -> Result<Vec<ShiftId>, PlanError> {
        mutate::approve_absence(self, absence_id, decided_by)
    }

    pub fn reject_absence(
        &mut self,
        absence_id: &AbsenceId,
        decided_by: Option<EmployeeId>,
    ) -> Result<(), PlanError> {
        mutate::reject_absence(self, absence_id, decided_by)
    }

    /// Évalue un candidat contre l'instantané courant du plan.
    pub fn check_shift(&self, candidate: &Shift, opts: PlanOptions) -> Vec<Conflict> {
        let same_day = self.plan.shifts_on(&candidate.employee, candidate.date);
        let absences = self.plan.approved_absences(&candidate.employee);
        let previous_day = match candidate.date.checked_sub_days(Days::new(1)) {
            Some(prev) => self.plan.shifts_on(&candidate.employee, prev),
            None => Vec::new(),
        };
        conflicts::check_conflicts(candidate, &same_day, &absences, &previous_day, opts)
    }

    pub fn detect_conflicts(&self, opts: PlanOptions) -> Vec<Conflict> {
        conflicts::detect_conflicts(self, opts)
    }

    pub fn weekly_stats(&self) -> WeeklyStats {
        stats::weekly_stats(&self.plan.shifts)
    }
}
