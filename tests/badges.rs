#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use rotaplan::{
    badge::{default_badges, unlocked, Badge, Condition, EmployeeStats},
    model::Employee,
    planner::{PlanOptions, Planner},
};

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

#[test]
fn first_shift_unlocks_the_entry_badge_only() {
    let mut planner = Planner::new();
    let alice = Employee::new("alice", "Alice");
    planner.add_employees(vec![alice.clone()]);
    planner
        .create_shift(
            &alice.id,
            NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            t(9, 0),
            t(17, 0),
            "bar",
            60,
            PlanOptions::default(),
        )
        .unwrap();

    let stats = EmployeeStats::collect(planner.plan(), &alice.id);
    assert_eq!(stats.shift_count, 1);
    assert_eq!(stats.total_hours, 7.0);

    let badges = default_badges();
    let earned = unlocked(&badges, &stats);
    let ids: Vec<&str> = earned.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["first-shift"]);
}

#[test]
fn conditions_evaluate_against_stats() {
    let stats = EmployeeStats {
        shift_count: 6,
        total_hours: 42.5,
        distinct_positions: 2,
        distinct_days: 5,
    };

    assert!(Condition::MinTotalHours(40.0).is_met(&stats));
    assert!(Condition::MinShiftCount(6).is_met(&stats));
    assert!(!Condition::MinDistinctPositions(3).is_met(&stats));
    assert!(Condition::MinDistinctDays(5).is_met(&stats));
}

#[test]
fn conditions_serialize_as_data() {
    let badge = Badge {
        id: "marathon".into(),
        name: "Marathonien".into(),
        description: None,
        condition: Condition::MinTotalHours(40.0),
    };

    let json = serde_json::to_string(&badge).unwrap();
    let back: Badge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, badge);
}
