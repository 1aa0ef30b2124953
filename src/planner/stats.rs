use crate::model::{EmployeeId, Shift};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Cumul simple (nombre de shifts, heures nettes).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub shifts: u32,
    pub hours: f64,
}

/// Agrégats hebdomadaires sur les shifts actifs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyStats {
    pub total_shifts: u32,
    pub total_hours: f64,
    pub by_employee: BTreeMap<EmployeeId, Totals>,
    pub by_position: BTreeMap<String, Totals>,
    /// Nombre d'employés distincts planifiés par jour.
    pub by_day: BTreeMap<NaiveDate, usize>,
}

/// Agrège en un seul passage. L'accumulation est commutative et associative :
/// le résultat ne dépend pas de l'ordre des shifts. Les shifts annulés sont
/// ignorés.
pub fn weekly_stats(shifts: &[Shift]) -> WeeklyStats {
    let mut stats = WeeklyStats::default();
    let mut day_employees: BTreeMap<NaiveDate, BTreeSet<EmployeeId>> = BTreeMap::new();

    for shift in shifts.iter().filter(|s| s.is_scheduled()) {
        let hours = shift.net_hours();

        stats.total_shifts += 1;
        stats.total_hours += hours;

        let by_emp = stats.by_employee.entry(shift.employee.clone()).or_default();
        by_emp.shifts += 1;
        by_emp.hours += hours;

        let by_pos = stats.by_position.entry(shift.position.clone()).or_default();
        by_pos.shifts += 1;
        by_pos.hours += hours;

        day_employees
            .entry(shift.date)
            .or_default()
            .insert(shift.employee.clone());
    }

    stats.by_day = day_employees
        .into_iter()
        .map(|(date, employees)| (date, employees.len()))
        .collect();

    stats
}
