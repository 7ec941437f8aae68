use chrono::NaiveDate;

use super::{habit_definition::DefinitionId, habit_event::HabitEventId};

/// One proposed habit occurrence, not yet assigned an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitEntry {
    pub definition_id: DefinitionId,
    pub date: NaiveDate,
    pub duration: f64,
}

impl HabitEntry {
    pub fn new(definition_id: impl Into<DefinitionId>, date: NaiveDate) -> Self {
        Self {
            definition_id: definition_id.into(),
            date,
            duration: 1.0,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

/// Short-lived value object carrying the user's pending intent between
/// interaction and commit. Applied as a single atomic store batch;
/// discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingChangeSet {
    pub additions: Vec<HabitEntry>,
    pub removals: Vec<HabitEventId>,
}

impl PendingChangeSet {
    pub fn additions(additions: Vec<HabitEntry>) -> Self {
        Self {
            additions,
            removals: Vec::new(),
        }
    }

    pub fn removals(removals: Vec<HabitEventId>) -> Self {
        Self {
            additions: Vec::new(),
            removals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}
