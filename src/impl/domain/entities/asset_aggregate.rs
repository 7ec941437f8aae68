use chrono::{DateTime, Utc};

use super::{habit_event::HabitEvent, value_vector::ValueVector};

/// The per-user running sum of all recorded habit event values.
///
/// Invariant: after every committed batch this equals the component-wise sum
/// of the value vectors of the user's currently-existing events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetAggregate {
    pub assets: ValueVector,
    pub last_updated: Option<DateTime<Utc>>,
}

impl AssetAggregate {
    pub fn total_value(&self) -> f64 {
        self.assets.total_value()
    }

    /// Recovery path: re-derive the aggregate from the event log alone.
    pub fn rebuilt_from(events: &[HabitEvent]) -> ValueVector {
        events
            .iter()
            .fold(ValueVector::default(), |sum, event| sum + event.value)
    }
}
