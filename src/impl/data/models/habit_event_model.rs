use chrono::{DateTime, Utc};

use super::calendar_date_model::CalendarDateModel;
use crate::entities::{HabitEvent, ValueVector};

/// Wire shape of one habit event document. The definition reference is
/// stored under `type` and the creation instant under `timestamp`, matching
/// the deployed document schema.
#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct HabitEventModel {
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) definition_id: String,
    pub(crate) date: CalendarDateModel,
    #[serde(default = "default_duration")]
    pub(crate) duration: f64,
    pub(crate) timestamp: DateTime<Utc>,
    #[serde(default)]
    pub(crate) value: ValueVector,
}

fn default_duration() -> f64 {
    1.0
}

impl From<&HabitEvent> for HabitEventModel {
    fn from(event: &HabitEvent) -> Self {
        Self {
            id: event.id.as_str().to_string(),
            definition_id: event.definition_id.as_str().to_string(),
            date: event.date.into(),
            duration: event.duration,
            timestamp: event.created_at,
            value: event.value,
        }
    }
}

impl From<HabitEventModel> for HabitEvent {
    fn from(model: HabitEventModel) -> Self {
        Self {
            id: model.id.into(),
            definition_id: model.definition_id.into(),
            date: model.date.into(),
            duration: model.duration,
            created_at: model.timestamp,
            value: model.value,
        }
    }
}
