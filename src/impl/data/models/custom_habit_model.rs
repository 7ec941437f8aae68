use chrono::{DateTime, Utc};

use crate::entities::{HabitCategory, HabitDefinition, ValueVector};

/// Wire shape of one custom habit document. Reward fields are stored flat
/// alongside the display metadata.
#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomHabitModel {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) icon: String,
    pub(crate) category: HabitCategory,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) detail: Option<String>,
    #[serde(flatten)]
    pub(crate) rewards: ValueVector,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<&HabitDefinition> for CustomHabitModel {
    fn from(definition: &HabitDefinition) -> Self {
        Self {
            id: definition.id.as_str().to_string(),
            name: definition.name.clone(),
            icon: definition.icon.clone(),
            category: definition.category,
            description: definition.description.clone(),
            detail: definition.detail.clone(),
            rewards: definition.rewards,
            created_at: definition.created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl From<CustomHabitModel> for HabitDefinition {
    fn from(model: CustomHabitModel) -> Self {
        Self {
            id: model.id.into(),
            name: model.name,
            icon: model.icon,
            category: model.category,
            rewards: model.rewards,
            description: model.description,
            detail: model.detail,
            is_custom: true,
            created_at: Some(model.created_at),
        }
    }
}
