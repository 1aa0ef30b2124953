#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use rotaplan::{
    apply_template,
    model::Employee,
    planner::{PlanOptions, Planner},
    Slot, TemplateStore, WeekTemplate,
};
use tempfile::tempdir;

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

#[test]
fn save_and_load_template_roundtrip() {
    let dir = tempdir().unwrap();
    let store = TemplateStore::new(dir.path());
    let template = sample_template();
    store.save(&template).unwrap();

    let loaded = store.load(&template.id).unwrap();
    assert_eq!(loaded.id, template.id);
    assert_eq!(loaded.slots.len(), template.slots.len());
}

#[test]
fn overlapping_slots_for_one_position_are_invalid() {
    let mut template = sample_template();
    template.slots.push(Slot {
        position: "bar".into(),
        start_time: t(10, 0),
        end_time: t(12, 0),
        break_minutes: 0,
        days: vec![1],
    });
    assert!(template.validate().is_err());
}

#[test]
fn apply_template_over_a_week() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let template = sample_template();
    // Lundi 7 au dimanche 13 septembre 2026.
    let from = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();
    let to = NaiveDate::from_ymd_opt(2026, 9, 13).unwrap();

    let outcome = apply_template(
        &mut planner,
        &template,
        &alice.id,
        from,
        to,
        PlanOptions::default(),
    )
    .unwrap();

    // Un créneau bar du lundi au vendredi, plus la cuisine du samedi.
    assert_eq!(outcome.created.len(), 6);
    assert!(outcome.skipped.is_empty());
    assert_eq!(planner.plan().shifts.len(), 6);
}

#[test]
fn conflicting_days_are_skipped_not_fatal() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);

    let opts = PlanOptions::default();
    // Pré-existant : chevauche le créneau bar du lundi.
    planner
        .create_shift(
            &alice.id,
            NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            t(10, 0),
            t(14, 0),
            "bar",
            0,
            opts,
        )
        .unwrap();

    let template = sample_template();
    let from = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();
    let to = NaiveDate::from_ymd_opt(2026, 9, 8).unwrap();

    let outcome =
        apply_template(&mut planner, &template, &alice.id, from, to, opts).unwrap();
    assert_eq!(outcome.created.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert!(outcome.skipped[0].contains("overlaps shift"));
}

fn sample_template() -> WeekTemplate {
    WeekTemplate {
        id: "semaine-bar".into(),
        name: "Semaine type bar".into(),
        description: Some("Service bar en semaine, cuisine le samedi".into()),
        slots: vec![
            Slot {
                position: "bar".into(),
                start_time: t(9, 0),
                end_time: t(17, 0),
                break_minutes: 60,
                days: vec![1, 2, 3, 4, 5],
            },
            Slot {
                position: "cuisine".into(),
                start_time: t(11, 0),
                end_time: t(15, 0),
                break_minutes: 0,
                days: vec![6],
            },
        ],
        metadata: None,
    }
}
