//! Conditions de déblocage de badges, exprimées en données.
//!
//! Chaque condition est une variante évaluée contre les statistiques d'un
//! employé ; pas de prédicat opaque, la règle reste sérialisable et auditable.

use crate::model::{EmployeeId, Plan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Condition de déblocage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    MinTotalHours(f64),
    MinShiftCount(u32),
    MinDistinctPositions(usize),
    MinDistinctDays(usize),
}

impl Condition {
    pub fn is_met(&self, stats: &EmployeeStats) -> bool {
        match self {
            Condition::MinTotalHours(h) => stats.total_hours >= *h,
            Condition::MinShiftCount(n) => stats.shift_count >= *n,
            Condition::MinDistinctPositions(n) => stats.distinct_positions >= *n,
            Condition::MinDistinctDays(n) => stats.distinct_days >= *n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub condition: Condition,
}

/// Statistiques d'un employé, calculées sur ses shifts actifs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeStats {
    pub shift_count: u32,
    pub total_hours: f64,
    pub distinct_positions: usize,
    pub distinct_days: usize,
}

impl EmployeeStats {
    pub fn collect(plan: &Plan, employee: &EmployeeId) -> Self {
        let mut stats = Self::default();
        let mut positions = BTreeSet::new();
        let mut days = BTreeSet::new();

        for shift in plan
            .shifts
            .iter()
            .filter(|s| &s.employee == employee && s.is_scheduled())
        {
            stats.shift_count += 1;
            stats.total_hours += shift.net_hours();
            positions.insert(shift.position.clone());
            days.insert(shift.date);
        }

        stats.distinct_positions = positions.len();
        stats.distinct_days = days.len();
        stats
    }
}

/// Badges débloqués par ces statistiques.
pub fn unlocked<'a>(badges: &'a [Badge], stats: &EmployeeStats) -> Vec<&'a Badge> {
    badges.iter().filter(|b| b.condition.is_met(stats)).collect()
}

/// Jeu de badges par défaut.
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "first-shift".into(),
            name: "Premier shift".into(),
            description: Some("Un premier créneau planifié".into()),
            condition: Condition::MinShiftCount(1),
        },
        Badge {
            id: "marathon".into(),
            name: "Marathonien".into(),
            description: Some("40 heures nettes planifiées".into()),
            condition: Condition::MinTotalHours(40.0),
        },
        Badge {
            id: "polyvalent".into(),
            name: "Polyvalent".into(),
            description: Some("Trois postes différents".into()),
            condition: Condition::MinDistinctPositions(3),
        },
        Badge {
            id: "assidu".into(),
            name: "Assidu".into(),
            description: Some("Cinq jours distincts planifiés".into()),
            condition: Condition::MinDistinctDays(5),
        },
    ]
}
