use chrono::{Duration, NaiveDate};

use crate::entities::{HabitEntry, PendingChangeSet};

/// Seven days of deterministic sample entries ending at `today`, cycling
/// through the built-in catalog. Intended for demo environments running
/// against the in-memory store instead of the hosted database.
pub fn demo_change_set(today: NaiveDate) -> PendingChangeSet {
    const PATTERN: &[&[&str]] = &[
        &["exercise", "study", "sleep8h"],
        &["reading", "walk", "hydration", "meditation"],
        &["exercise", "noAlcohol", "limitPhone"],
        &["study", "floss", "sleep8h", "walk"],
        &["meditation", "reading", "hydration"],
        &["exercise", "study", "floss", "noAlcohol"],
        &["sleep8h", "walk", "limitPhone"],
    ];

    let mut additions = Vec::new();
    for (offset, ids) in PATTERN.iter().enumerate() {
        let date = today - Duration::days(offset as i64);
        for id in *ids {
            additions.push(HabitEntry::new(*id, date));
        }
    }
    PendingChangeSet::additions(additions)
}
