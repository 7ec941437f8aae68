use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{habit_definition::DefinitionId, value_vector::ValueVector};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitEventId(String);

impl HabitEventId {
    pub(crate) fn generate() -> Self {
        HabitEventId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HabitEventId {
    fn from(s: &str) -> Self {
        HabitEventId(s.to_string())
    }
}

impl From<String> for HabitEventId {
    fn from(s: String) -> Self {
        HabitEventId(s)
    }
}

impl std::fmt::Display for HabitEventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded occurrence of a habit on a calendar date. The value vector
/// is snapshotted from the definition at creation time and never changes,
/// even if the definition is later edited or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitEvent {
    pub id: HabitEventId,
    /// May reference a since-deleted or since-disabled definition.
    pub definition_id: DefinitionId,
    /// The user-facing day the event is attributed to, distinct from the
    /// creation instant.
    pub date: NaiveDate,
    pub duration: f64,
    pub created_at: DateTime<Utc>,
    pub value: ValueVector,
}
