#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use rotaplan::{
    model::{AbsenceType, Employee, ShiftStatus},
    planner::{PlanError, PlanOptions, Planner},
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

#[test]
fn create_basic_shifts() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    let bob = Employee::new("bob", "Bob");
    planner.add_employees(vec![alice.clone(), bob.clone()]);

    let opts = PlanOptions::default();
    planner
        .create_shift(&alice.id, d(2026, 9, 7), t(9, 0), t(17, 0), "bar", 60, opts)
        .unwrap();
    planner
        .create_shift(&bob.id, d(2026, 9, 7), t(9, 0), t(17, 0), "bar", 60, opts)
        .unwrap();

    assert_eq!(planner.plan().shifts.len(), 2);
}

#[test]
fn overlapping_create_is_rejected_with_first_message() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let opts = PlanOptions::default();
    planner
        .create_shift(&alice.id, d(2026, 9, 7), t(9, 0), t(17, 0), "bar", 0, opts)
        .unwrap();

    let err = planner
        .create_shift(&alice.id, d(2026, 9, 7), t(16, 0), t(20, 0), "bar", 0, opts)
        .unwrap_err();
    match err {
        PlanError::Conflict(message) => assert!(message.contains("overlaps shift")),
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(planner.plan().shifts.len(), 1);
}

#[test]
fn invalid_time_range_fails_fast() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let err = planner
        .create_shift(
            &alice.id,
            d(2026, 9, 7),
            t(17, 0),
            t(9, 0),
            "bar",
            0,
            PlanOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidTimeRange));
}

#[test]
fn update_excludes_the_edited_shift_itself() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let opts = PlanOptions::default();
    let id = planner
        .create_shift(&alice.id, d(2026, 9, 7), t(9, 0), t(12, 0), "bar", 0, opts)
        .unwrap();

    // S'étendre sur son propre créneau n'est pas un conflit.
    planner.update_shift_time(&id, t(8, 0), t(13, 0), opts).unwrap();
    let shift = planner.plan().find_shift(&id).unwrap();
    assert_eq!(shift.start, t(8, 0));
    assert_eq!(shift.end, t(13, 0));
}

#[test]
fn cancelled_shift_frees_the_interval() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let opts = PlanOptions::default();
    let id = planner
        .create_shift(&alice.id, d(2026, 9, 7), t(9, 0), t(17, 0), "bar", 0, opts)
        .unwrap();
    planner.cancel_shift(&id).unwrap();

    planner
        .create_shift(&alice.id, d(2026, 9, 7), t(9, 0), t(17, 0), "bar", 0, opts)
        .unwrap();
}

#[test]
fn approving_absence_cascades_to_covered_shifts() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    let boss = Employee::new("boss", "Boss");
    planner.add_employees(vec![alice.clone(), boss.clone()]);

    let opts = PlanOptions::default();
    let covered = planner
        .create_shift(&alice.id, d(2026, 9, 8), t(9, 0), t(17, 0), "bar", 0, opts)
        .unwrap();
    let outside = planner
        .create_shift(&alice.id, d(2026, 9, 12), t(9, 0), t(17, 0), "bar", 0, opts)
        .unwrap();

    let absence = planner
        .request_absence(&alice.id, AbsenceType::Vacation, d(2026, 9, 7), d(2026, 9, 10))
        .unwrap();
    let impacted = planner
        .approve_absence(&absence, Some(boss.id.clone()))
        .unwrap();

    assert_eq!(impacted, vec![covered.clone()]);
    assert_eq!(
        planner.plan().find_shift(&covered).unwrap().status,
        ShiftStatus::Cancelled
    );
    assert_eq!(
        planner.plan().find_shift(&outside).unwrap().status,
        ShiftStatus::Scheduled
    );

    let stored = planner
        .plan()
        .absences
        .iter()
        .find(|a| a.id == absence)
        .unwrap();
    assert_eq!(stored.impacted_shifts, vec![covered]);
    assert_eq!(stored.decided_by, Some(boss.id));

    // Plus de création possible dans la période approuvée.
    let err = planner
        .create_shift(&alice.id, d(2026, 9, 9), t(9, 0), t(12, 0), "bar", 0, opts)
        .unwrap_err();
    assert!(matches!(err, PlanError::Conflict(_)));
}

#[test]
fn rejected_absence_never_blocks() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let absence = planner
        .request_absence(&alice.id, AbsenceType::Sick, d(2026, 9, 7), d(2026, 9, 9))
        .unwrap();
    planner.reject_absence(&absence, None).unwrap();

    planner
        .create_shift(
            &alice.id,
            d(2026, 9, 8),
            t(9, 0),
            t(17, 0),
            "bar",
            0,
            PlanOptions::default(),
        )
        .unwrap();
}

#[test]
fn absence_cannot_be_decided_twice() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let absence = planner
        .request_absence(&alice.id, AbsenceType::Training, d(2026, 9, 7), d(2026, 9, 7))
        .unwrap();
    planner.approve_absence(&absence, None).unwrap();

    let err = planner.approve_absence(&absence, None).unwrap_err();
    assert!(matches!(err, PlanError::AbsenceInvalid(_)));
}

#[test]
fn detect_conflicts_scans_the_whole_plan() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let opts = PlanOptions::default();
    planner
        .create_shift(&alice.id, d(2026, 9, 7), t(9, 0), t(12, 0), "bar", 0, opts)
        .unwrap();

    // Chevauchement injecté directement, comme le ferait un flux distant.
    let mut rogue = planner.plan().shifts[0].clone();
    rogue.id = rotaplan::model::ShiftId::random();
    rogue.start = t(11, 0);
    rogue.end = t(14, 0);
    planner.plan_mut().shifts.push(rogue);

    let conflicts = planner.detect_conflicts(opts);
    assert_eq!(conflicts.len(), 1);
}
