#![forbid(unsafe_code)]
//! Rotaplan — bibliothèque de planification de shifts d'équipe locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Moteur de règles : chevauchements, absences approuvées, repos minimal.
//! - Statistiques hebdomadaires, badges.
//! - Dates et heures naïves (jour calendaire + HH:MM) ; pas de shift à cheval
//!   sur minuit.

pub mod badge;
pub mod io;
pub mod model;
pub mod planner;
pub mod session;
pub mod storage;
pub mod sync;
pub mod template;

pub use badge::{default_badges, unlocked, Badge, Condition, EmployeeStats};
pub use model::{
    Absence, AbsenceId, AbsenceStatus, AbsenceType, Employee, EmployeeId, Plan, Shift, ShiftId,
    ShiftStatus,
};
pub use planner::{
    check_conflicts, weekly_stats, Conflict, ConflictKind, ConflictSource, PlanError, PlanOptions,
    Planner, WeeklyStats,
};
pub use session::{FixedSession, IdentityProvider};
pub use storage::{JsonStorage, Storage};
pub use sync::{apply_batch, apply_change, DocumentChange};
pub use template::{
    apply_template, load_template_from_file, ApplyOutcome, Slot, TemplateInfo, TemplateStore,
    WeekTemplate,
};
