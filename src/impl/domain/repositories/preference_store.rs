use std::collections::HashSet;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::DefinitionId;

/// The set of built-in definitions a user has hidden. Consulted only when
/// listing the visible catalog; the ledger records against disabled
/// definitions without complaint, since disabling must not affect history.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn is_disabled(&self, user_id: &str, id: &DefinitionId) -> Result<bool, ServerError>;

    /// Idempotent: disabling an already-disabled id is a no-op.
    async fn disable(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError>;

    /// Idempotent: enabling an id that is not disabled is a no-op.
    async fn enable(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError>;

    async fn disabled_set(&self, user_id: &str) -> Result<HashSet<DefinitionId>, ServerError>;
}
