use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::memory_store_datasource::MemoryStoreDatasource,
    domain::repositories::preference_store::PreferenceStore,
    entities::DefinitionId,
};

/// `PreferenceStore` backed by the in-memory document datasource. Set
/// semantics make both toggles naturally idempotent.
pub struct MemoryPreferenceStore {
    datasource: Arc<MemoryStoreDatasource>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::with_datasource(Arc::new(MemoryStoreDatasource::new()))
    }

    pub(crate) fn with_datasource(datasource: Arc<MemoryStoreDatasource>) -> Self {
        Self { datasource }
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn is_disabled(&self, user_id: &str, id: &DefinitionId) -> Result<bool, ServerError> {
        Ok(self
            .datasource
            .with_user(user_id, |docs| docs.disabled_habits.contains(id.as_str())))
    }

    async fn disable(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError> {
        self.datasource.with_user_mut(user_id, |docs| {
            docs.disabled_habits.insert(id.as_str().to_string());
        });
        Ok(())
    }

    async fn enable(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError> {
        self.datasource.with_user_mut(user_id, |docs| {
            docs.disabled_habits.remove(id.as_str());
        });
        Ok(())
    }

    async fn disabled_set(&self, user_id: &str) -> Result<HashSet<DefinitionId>, ServerError> {
        Ok(self.datasource.with_user(user_id, |docs| {
            docs.disabled_habits
                .iter()
                .map(|id| DefinitionId::from(id.as_str()))
                .collect()
        }))
    }
}
