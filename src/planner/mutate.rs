use super::{PlanError, PlanOptions, Planner};
use crate::model::{
    Absence, AbsenceId, AbsenceStatus, AbsenceType, EmployeeId, Shift, ShiftId, ShiftStatus,
};
use chrono::{NaiveDate, NaiveTime};

pub(super) fn create_shift(
    planner: &mut Planner,
    employee: &EmployeeId,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    position: &str,
    break_minutes: u32,
    opts: PlanOptions,
) -> Result<ShiftId, PlanError> {
    if planner.plan.find_employee_by_id(employee).is_none() {
        return Err(PlanError::UnknownEmployee(employee.as_str().to_string()));
    }
    let shift = Shift::new(
        employee.clone(),
        date,
        start,
        end,
        position.to_string(),
        break_minutes,
    )
    .map_err(|_| PlanError::InvalidTimeRange)?;

    reject_on_conflict(planner, &shift, opts)?;

    let id = shift.id.clone();
    planner.plan.shifts.push(shift);
    Ok(id)
}

pub(super) fn update_shift_time(
    planner: &mut Planner,
    shift_id: &ShiftId,
    start: NaiveTime,
    end: NaiveTime,
    opts: PlanOptions,
) -> Result<(), PlanError> {
    if end <= start {
        return Err(PlanError::InvalidTimeRange);
    }
    let mut candidate = planner
        .plan
        .find_shift(shift_id)
        .cloned()
        .ok_or_else(|| PlanError::UnknownShift(shift_id.as_str().to_string()))?;
    candidate.start = start;
    candidate.end = end;

    // Contrôle avant écriture ; le shift édité s'exclut lui-même par id.
    reject_on_conflict(planner, &candidate, opts)?;

    let shift = planner
        .plan
        .find_shift_mut(shift_id)
        .ok_or_else(|| PlanError::UnknownShift(shift_id.as_str().to_string()))?;
    shift.start = start;
    shift.end = end;
    Ok(())
}

pub(super) fn cancel_shift(planner: &mut Planner, shift_id: &ShiftId) -> Result<(), PlanError> {
    let shift = planner
        .plan
        .find_shift_mut(shift_id)
        .ok_or_else(|| PlanError::UnknownShift(shift_id.as_str().to_string()))?;
    shift.status = ShiftStatus::Cancelled;
    Ok(())
}

pub(super) fn remove_shift(planner: &mut Planner, shift_id: &ShiftId) -> Result<(), PlanError> {
    let before = planner.plan.shifts.len();
    planner.plan.shifts.retain(|s| &s.id != shift_id);
    if planner.plan.shifts.len() == before {
        return Err(PlanError::UnknownShift(shift_id.as_str().to_string()));
    }
    Ok(())
}

pub(super) fn request_absence(
    planner: &mut Planner,
    employee: &EmployeeId,
    kind: AbsenceType,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<AbsenceId, PlanError> {
    if planner.plan.find_employee_by_id(employee).is_none() {
        return Err(PlanError::UnknownEmployee(employee.as_str().to_string()));
    }
    let absence = Absence::new(employee.clone(), kind, start_date, end_date)
        .map_err(|_| PlanError::InvalidDateRange)?;
    let id = absence.id.clone();
    planner.plan.absences.push(absence);
    Ok(id)
}

/// Approuve une absence en attente et annule en cascade les shifts actifs
/// couverts par la période ; leurs ids sont consignés sur l'absence.
pub(super) fn approve_absence(
    planner: &mut Planner,
    absence_id: &AbsenceId,
    decided_by: Option<EmployeeId>,
) -> Result<Vec<ShiftId>, PlanError> {
    let (employee, start_date, end_date) = {
        let absence = planner
            .plan
            .absences
            .iter()
            .find(|a| &a.id == absence_id)
            .ok_or_else(|| PlanError::UnknownAbsence(absence_id.as_str().to_string()))?;
        if absence.status != AbsenceStatus::Pending {
            return Err(PlanError::AbsenceInvalid("absence already decided"));
        }
        (absence.employee.clone(), absence.start_date, absence.end_date)
    };

    let mut impacted = Vec::new();
    for shift in planner.plan.shifts.iter_mut() {
        if shift.employee == employee
            && shift.is_scheduled()
            && start_date <= shift.date
            && shift.date <= end_date
        {
            shift.status = ShiftStatus::Cancelled;
            impacted.push(shift.id.clone());
        }
    }

    let absence = planner
        .plan
        .find_absence_mut(absence_id)
        .ok_or_else(|| PlanError::UnknownAbsence(absence_id.as_str().to_string()))?;
    absence.status = AbsenceStatus::Approved;
    absence.decided_by = decided_by;
    absence.impacted_shifts = impacted.clone();
    Ok(impacted)
}

pub(super) fn reject_absence(
    planner: &mut Planner,
    absence_id: &AbsenceId,
    decided_by: Option<EmployeeId>,
) -> Result<(), PlanError> {
    let absence = planner
        .plan
        .find_absence_mut(absence_id)
        .ok_or_else(|| PlanError::UnknownAbsence(absence_id.as_str().to_string()))?;
    if absence.status != AbsenceStatus::Pending {
        return Err(PlanError::AbsenceInvalid("absence already decided"));
    }
    absence.status = AbsenceStatus::Rejected;
    absence.decided_by = decided_by;
    Ok(())
}

/// Refuse l'écriture dès le premier conflit, en remontant son message.
fn reject_on_conflict(
    planner: &Planner,
    candidate: &Shift,
    opts: PlanOptions,
) -> Result<(), PlanError> {
    let conflicts = planner.check_shift(candidate, opts);
    match conflicts.into_iter().next() {
        Some(first) => Err(PlanError::Conflict(first.message)),
        None => Ok(()),
    }
}
