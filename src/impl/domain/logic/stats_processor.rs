use std::collections::HashSet;

use crate::entities::{HabitEvent, SummaryStats};

/// Pure derivation of headline statistics from an event-log snapshot.
/// Recomputable any number of times without side effects.
pub(crate) struct StatsProcessor<'a> {
    events: &'a [HabitEvent],
}

impl<'a> StatsProcessor<'a> {
    pub(crate) fn new(events: &'a [HabitEvent]) -> Self {
        Self { events }
    }

    pub(crate) fn process(&self) -> SummaryStats {
        let distinct_days = self
            .events
            .iter()
            .map(|event| event.date)
            .collect::<HashSet<_>>()
            .len();
        let total_events = self.events.len();
        let average_events_per_day = if distinct_days > 0 {
            let raw = total_events as f64 / distinct_days as f64;
            (raw * 10.0).round() / 10.0
        } else {
            0.0
        };
        SummaryStats {
            distinct_days,
            total_events,
            average_events_per_day,
        }
    }
}
