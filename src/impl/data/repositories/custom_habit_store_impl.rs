use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::memory_store_datasource::MemoryStoreDatasource,
        models::custom_habit_model::CustomHabitModel,
    },
    domain::repositories::custom_habit_store::CustomHabitStore,
    entities::{DefinitionId, HabitDefinition},
    errors::{CorruptDocument, CustomHabitNotFound, StoreRejected},
};

/// `CustomHabitStore` backed by the in-memory document datasource.
pub struct MemoryCustomHabitStore {
    datasource: Arc<MemoryStoreDatasource>,
}

impl MemoryCustomHabitStore {
    pub fn new() -> Self {
        Self::with_datasource(Arc::new(MemoryStoreDatasource::new()))
    }

    pub(crate) fn with_datasource(datasource: Arc<MemoryStoreDatasource>) -> Self {
        Self { datasource }
    }
}

impl Default for MemoryCustomHabitStore {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(doc: &serde_json::Value) -> Result<HabitDefinition, ServerError> {
    serde_json::from_value::<CustomHabitModel>(doc.clone())
        .map(HabitDefinition::from)
        .map_err(|e| CorruptDocument::with_debug("customHabits", &e))
}

fn encode(definition: &HabitDefinition) -> Result<serde_json::Value, ServerError> {
    serde_json::to_value(CustomHabitModel::from(definition))
        .map_err(|e| StoreRejected::with_debug("failed to encode custom habit document", &e))
}

#[async_trait]
impl CustomHabitStore for MemoryCustomHabitStore {
    async fn list(&self, user_id: &str) -> Result<Vec<HabitDefinition>, ServerError> {
        self.datasource.with_user(user_id, |docs| {
            docs.custom_habits.iter().map(|(_, doc)| decode(doc)).collect()
        })
    }

    async fn find(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<Option<HabitDefinition>, ServerError> {
        self.datasource.with_user(user_id, |docs| {
            docs.custom_habits
                .iter()
                .find(|(doc_id, _)| doc_id == id.as_str())
                .map(|(_, doc)| decode(doc))
                .transpose()
        })
    }

    async fn insert(
        &self,
        user_id: &str,
        definition: HabitDefinition,
    ) -> Result<(), ServerError> {
        let doc = encode(&definition)?;
        self.datasource.with_user_mut(user_id, |docs| {
            if docs
                .custom_habits
                .iter()
                .any(|(doc_id, _)| doc_id == definition.id.as_str())
            {
                return Err(StoreRejected::new("duplicate custom habit id"));
            }
            docs.custom_habits
                .push((definition.id.as_str().to_string(), doc));
            Ok(())
        })
    }

    async fn update(
        &self,
        user_id: &str,
        definition: HabitDefinition,
    ) -> Result<(), ServerError> {
        let doc = encode(&definition)?;
        self.datasource.with_user_mut(user_id, |docs| {
            let slot = docs
                .custom_habits
                .iter_mut()
                .find(|(doc_id, _)| doc_id == definition.id.as_str())
                .ok_or_else(|| CustomHabitNotFound::new(definition.id.as_str()))?;
            slot.1 = doc;
            Ok(())
        })
    }

    async fn delete(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError> {
        // Idempotent, like the hosted store's document delete.
        self.datasource.with_user_mut(user_id, |docs| {
            docs.custom_habits.retain(|(doc_id, _)| doc_id != id.as_str());
        });
        Ok(())
    }
}
