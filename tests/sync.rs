#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use rotaplan::{
    apply_batch, apply_change,
    model::{Employee, EmployeeId, Plan, Shift},
    sync::DocumentChange,
};

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

fn sample_shift(employee: &EmployeeId) -> Shift {
    Shift::new(
        employee.clone(),
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
        t(9, 0),
        t(17, 0),
        "bar".into(),
        0,
    )
    .unwrap()
}

#[test]
fn upsert_inserts_then_replaces() {
    let mut plan = Plan::default();
    let alice = Employee::new("alice", "Alice");
    let shift = sample_shift(&alice.id);
    let id = shift.id.clone();

    apply_change(&mut plan, DocumentChange::ShiftUpserted(shift.clone()));
    assert_eq!(plan.shifts.len(), 1);

    let mut modified = shift;
    modified.end = t(18, 0);
    apply_change(&mut plan, DocumentChange::ShiftUpserted(modified));
    assert_eq!(plan.shifts.len(), 1);
    assert_eq!(plan.find_shift(&id).unwrap().end, t(18, 0));
}

#[test]
fn removal_is_idempotent() {
    let mut plan = Plan::default();
    let alice = Employee::new("alice", "Alice");
    let shift = sample_shift(&alice.id);
    let id = shift.id.clone();

    apply_change(&mut plan, DocumentChange::ShiftUpserted(shift));
    apply_change(&mut plan, DocumentChange::ShiftRemoved(id.clone()));
    apply_change(&mut plan, DocumentChange::ShiftRemoved(id));
    assert!(plan.shifts.is_empty());
}

#[test]
fn batch_applies_in_order() {
    let mut plan = Plan::default();
    let alice = Employee::new("alice", "Alice");
    let shift = sample_shift(&alice.id);
    let id = shift.id.clone();

    apply_batch(
        &mut plan,
        vec![
            DocumentChange::EmployeeUpserted(alice.clone()),
            DocumentChange::ShiftUpserted(shift),
            DocumentChange::ShiftRemoved(id),
        ],
    );
    assert_eq!(plan.employees.len(), 1);
    assert!(plan.shifts.is_empty());
}
