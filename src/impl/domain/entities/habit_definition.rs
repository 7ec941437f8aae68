use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_vector::ValueVector;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(String);

impl DefinitionId {
    /// Fresh identifier for a user-defined habit. Prefixed so custom ids can
    /// never collide with the built-in catalog keys.
    pub(crate) fn generate_custom() -> Self {
        DefinitionId(format!("custom_{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DefinitionId {
    fn from(s: &str) -> Self {
        DefinitionId(s.to_string())
    }
}

impl From<String> for DefinitionId {
    fn from(s: String) -> Self {
        DefinitionId(s)
    }
}

impl std::fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Health,
    Learning,
    Focus,
    Mental,
    Custom,
}

/// A catalog entry: the reward granted per occurrence of a habit, plus its
/// display metadata. Built-in definitions are immutable and shared by all
/// users; custom definitions are owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitDefinition {
    pub id: DefinitionId,
    pub name: String,
    pub icon: String,
    pub category: HabitCategory,
    pub rewards: ValueVector,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub is_custom: bool,
    /// Set for custom definitions only; drives insertion ordering.
    pub created_at: Option<DateTime<Utc>>,
}

/// Form input for creating a custom habit. Life impact is authored in
/// minutes and converted to days on validation.
#[derive(Debug, Clone, Default)]
pub struct CustomHabitDraft {
    pub name: String,
    pub icon: Option<String>,
    pub category: Option<HabitCategory>,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub life_minutes: Option<f64>,
    pub medical_savings: Option<f64>,
    pub skill_assets: Option<f64>,
    pub focus_hours: Option<f64>,
}

impl CustomHabitDraft {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Partial update for a custom habit; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CustomHabitPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub category: Option<HabitCategory>,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub life_minutes: Option<f64>,
    pub medical_savings: Option<f64>,
    pub skill_assets: Option<f64>,
    pub focus_hours: Option<f64>,
}
