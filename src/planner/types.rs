use crate::model::{AbsenceId, EmployeeId, ShiftId};
use thiserror::Error;

/// Règles de planification
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    pub min_rest_hours: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { min_rest_hours: 11 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Overlap,
    Absence,
    RestTime,
}

/// Entité à l'origine du conflit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictSource {
    Shift(ShiftId),
    Absence(AbsenceId),
}

/// Violation d'une règle de planification, retournée comme donnée
/// (jamais comme erreur) ; l'appelant décide du sort de l'écriture.
#[derive(Debug, Clone)]
pub struct Conflict {
    pub employee: EmployeeId,
    pub kind: ConflictKind,
    pub source: ConflictSource,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid time range: end must be after start")]
    InvalidTimeRange,
    #[error("invalid date range: end must not precede start")]
    InvalidDateRange,
    #[error("unknown employee handle: {0}")]
    UnknownEmployee(String),
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    #[error("unknown absence: {0}")]
    UnknownAbsence(String),
    #[error("absence invalid: {0}")]
    AbsenceInvalid(&'static str),
    #[error("scheduling conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
