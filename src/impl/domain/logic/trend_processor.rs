use std::collections::BTreeMap;

use crate::entities::{HabitEvent, TrendPoint, ValueVector};

/// Pure derivation of the cumulative asset trend series: events folded in
/// ascending date order into one running-total row per distinct date.
pub(crate) struct TrendProcessor<'a> {
    events: &'a [HabitEvent],
}

impl<'a> TrendProcessor<'a> {
    pub(crate) fn new(events: &'a [HabitEvent]) -> Self {
        Self { events }
    }

    pub(crate) fn process(&self) -> Vec<TrendPoint> {
        let mut sorted: Vec<&HabitEvent> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.date);

        let mut cumulative = ValueVector::default();
        let mut buckets = BTreeMap::new();
        for event in sorted {
            cumulative += event.value;
            // Each date bucket holds the running total up to and including
            // that date; later events overwrite with a fresher total.
            buckets.insert(event.date, cumulative);
        }

        buckets
            .into_iter()
            .map(|(date, cumulative)| TrendPoint {
                date,
                cumulative,
                cumulative_total_value: cumulative.total_value(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::entities::HabitEventId;

    fn event(date: &str, value: ValueVector) -> HabitEvent {
        HabitEvent {
            id: HabitEventId::generate(),
            definition_id: "exercise".into(),
            date: date.parse::<NaiveDate>().unwrap(),
            duration: 1.0,
            created_at: Utc::now(),
            value,
        }
    }

    #[test]
    fn one_row_per_distinct_date_ascending() {
        let events = vec![
            event("2024-01-03", ValueVector::new(0.0, 10.0, 0.0, 0.0)),
            event("2024-01-01", ValueVector::new(0.0, 60.0, 0.0, 0.0)),
            event("2024-01-01", ValueVector::new(0.0, 5.0, 0.0, 0.0)),
        ];
        let trend = TrendProcessor::new(&events).process();
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, "2024-01-01".parse::<NaiveDate>().unwrap());
        assert_eq!(trend[0].cumulative.medical_savings, 65.0);
        assert_eq!(trend[1].cumulative.medical_savings, 75.0);
    }

    #[test]
    fn total_value_is_non_decreasing_for_non_negative_values() {
        let events = vec![
            event("2024-01-01", ValueVector::new(0.02, 60.0, 0.0, 0.5)),
            event("2024-01-02", ValueVector::new(0.0, 0.0, 84.0, 1.0)),
            event("2024-01-04", ValueVector::new(0.01, 12.0, 0.0, 0.0)),
            event("2024-01-03", ValueVector::default()),
        ];
        let trend = TrendProcessor::new(&events).process();
        for pair in trend.windows(2) {
            assert!(pair[1].cumulative_total_value >= pair[0].cumulative_total_value);
        }
    }
}
