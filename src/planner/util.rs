use chrono::{NaiveTime, Timelike};

/// Minutes depuis minuit.
pub(super) fn minutes(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// Chevauchement d'intervalles demi-ouverts `[s1, e1)` et `[s2, e2)`.
/// L'adjacence (`e1 == s2`) n'est pas un chevauchement.
pub(super) fn overlaps(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    minutes(s1) < minutes(e2) && minutes(e1) > minutes(s2)
}

/// Repos entre la fin d'un shift (veille) et le début du suivant (lendemain),
/// en minutes : `(24h - fin) + début`. Suppose des jours adjacents et une fin
/// avant minuit.
pub(super) fn rest_minutes(prev_end: NaiveTime, next_start: NaiveTime) -> i64 {
    (24 * 60 - minutes(prev_end)) + minutes(next_start)
}
