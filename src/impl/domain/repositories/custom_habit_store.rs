use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{DefinitionId, HabitDefinition};

/// Per-user storage for user-defined habit definitions.
#[async_trait]
pub trait CustomHabitStore: Send + Sync {
    /// All custom definitions owned by the user, in insertion order.
    async fn list(&self, user_id: &str) -> Result<Vec<HabitDefinition>, ServerError>;

    async fn find(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<Option<HabitDefinition>, ServerError>;

    async fn insert(&self, user_id: &str, definition: HabitDefinition)
        -> Result<(), ServerError>;

    /// Replaces the stored definition with the same id.
    async fn update(&self, user_id: &str, definition: HabitDefinition)
        -> Result<(), ServerError>;

    /// Removes the definition only; historical events referencing it are
    /// untouched.
    async fn delete(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError>;
}
