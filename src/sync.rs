//! Application locale d'un flux de changements documentaires.
//!
//! Le magasin distant notifie des ajouts/modifications/suppressions par
//! collection ; ce module les rejoue sur un [`Plan`] en mémoire. Les ajouts
//! et modifications sont traités en upsert : le flux étant seulement
//! éventuellement cohérent, les deux peuvent arriver dans n'importe quel
//! ordre pour un même document.

use crate::model::{Absence, AbsenceId, Employee, EmployeeId, Plan, Shift, ShiftId};

/// Changement incrémental émis par le magasin de documents.
#[derive(Debug, Clone)]
pub enum DocumentChange {
    ShiftUpserted(Shift),
    ShiftRemoved(ShiftId),
    AbsenceUpserted(Absence),
    AbsenceRemoved(AbsenceId),
    EmployeeUpserted(Employee),
    EmployeeRemoved(EmployeeId),
}

/// Rejoue un changement sur le plan.
pub fn apply_change(plan: &mut Plan, change: DocumentChange) {
    match change {
        DocumentChange::ShiftUpserted(shift) => {
            match plan.shifts.iter_mut().find(|s| s.id == shift.id) {
                Some(existing) => *existing = shift,
                None => plan.shifts.push(shift),
            }
        }
        DocumentChange::ShiftRemoved(id) => plan.shifts.retain(|s| s.id != id),
        DocumentChange::AbsenceUpserted(absence) => {
            match plan.absences.iter_mut().find(|a| a.id == absence.id) {
                Some(existing) => *existing = absence,
                None => plan.absences.push(absence),
            }
        }
        DocumentChange::AbsenceRemoved(id) => plan.absences.retain(|a| a.id != id),
        DocumentChange::EmployeeUpserted(employee) => {
            match plan.employees.iter_mut().find(|e| e.id == employee.id) {
                Some(existing) => *existing = employee,
                None => plan.employees.push(employee),
            }
        }
        DocumentChange::EmployeeRemoved(id) => plan.employees.retain(|e| e.id != id),
    }
}

/// Rejoue un lot de changements, dans l'ordre reçu.
pub fn apply_batch<I: IntoIterator<Item = DocumentChange>>(plan: &mut Plan, changes: I) {
    for change in changes {
        apply_change(plan, change);
    }
}
