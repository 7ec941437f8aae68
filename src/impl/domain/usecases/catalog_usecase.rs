use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    domain::{
        logic::catalog_rules,
        repositories::{custom_habit_store::CustomHabitStore, preference_store::PreferenceStore},
    },
    entities::{CustomHabitDraft, CustomHabitPatch, DefinitionId, HabitCategory, HabitDefinition},
    errors::{CustomHabitNotFound, MissingUserId},
};

/// The habit catalog as one user sees it: built-in definitions (minus the
/// disabled ones) plus that user's custom definitions.
#[async_trait]
pub trait CatalogUsecase: Send + Sync {
    async fn resolve(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<Option<HabitDefinition>, ServerError>;

    async fn list_visible(&self, user_id: &str) -> Result<Vec<HabitDefinition>, ServerError>;

    async fn create_custom(
        &self,
        user_id: &str,
        draft: CustomHabitDraft,
    ) -> Result<HabitDefinition, ServerError>;

    async fn update_custom(
        &self,
        user_id: &str,
        id: &DefinitionId,
        patch: CustomHabitPatch,
    ) -> Result<HabitDefinition, ServerError>;

    /// Removes the definition only. Events referencing it keep their
    /// snapshotted values and degrade to a zero-value definition on replay.
    async fn delete_custom(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError>;
}

pub(crate) struct CatalogUsecaseImpl<C, P>
where
    C: CustomHabitStore,
    P: PreferenceStore,
{
    custom_habits: Arc<C>,
    preferences: Arc<P>,
    builtins: Vec<HabitDefinition>,
}

impl<C, P> CatalogUsecaseImpl<C, P>
where
    C: CustomHabitStore,
    P: PreferenceStore,
{
    pub(crate) fn new(
        custom_habits: Arc<C>,
        preferences: Arc<P>,
        builtins: Vec<HabitDefinition>,
    ) -> Self {
        Self {
            custom_habits,
            preferences,
            builtins,
        }
    }
}

fn ensure_user(user_id: &str) -> Result<(), ServerError> {
    if user_id.trim().is_empty() {
        return Err(MissingUserId::new());
    }
    Ok(())
}

#[async_trait]
impl<C, P> CatalogUsecase for CatalogUsecaseImpl<C, P>
where
    C: CustomHabitStore,
    P: PreferenceStore,
{
    async fn resolve(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<Option<HabitDefinition>, ServerError> {
        ensure_user(user_id)?;
        if let Some(definition) = self.builtins.iter().find(|d| &d.id == id) {
            return Ok(Some(definition.clone()));
        }
        self.custom_habits.find(user_id, id).await
    }

    async fn list_visible(&self, user_id: &str) -> Result<Vec<HabitDefinition>, ServerError> {
        ensure_user(user_id)?;
        let disabled = self.preferences.disabled_set(user_id).await?;
        let customs = self.custom_habits.list(user_id).await?;
        Ok(catalog_rules::visible_catalog(
            &self.builtins,
            &customs,
            &disabled,
        ))
    }

    async fn create_custom(
        &self,
        user_id: &str,
        draft: CustomHabitDraft,
    ) -> Result<HabitDefinition, ServerError> {
        ensure_user(user_id)?;
        let existing = self.custom_habits.list(user_id).await?;
        let name = catalog_rules::validate_name(&draft.name, &existing, None)?;
        let rewards = catalog_rules::rewards_from_form(
            draft.life_minutes,
            draft.medical_savings,
            draft.skill_assets,
            draft.focus_hours,
        )?;
        let definition = HabitDefinition {
            id: DefinitionId::generate_custom(),
            name,
            icon: draft.icon.unwrap_or_default(),
            category: draft.category.unwrap_or(HabitCategory::Custom),
            rewards,
            description: draft.description,
            detail: draft.detail,
            is_custom: true,
            created_at: Some(Utc::now()),
        };
        self.custom_habits.insert(user_id, definition.clone()).await?;
        debug!(user = user_id, definition = %definition.id, "created custom habit");
        Ok(definition)
    }

    async fn update_custom(
        &self,
        user_id: &str,
        id: &DefinitionId,
        patch: CustomHabitPatch,
    ) -> Result<HabitDefinition, ServerError> {
        ensure_user(user_id)?;
        let existing = self.custom_habits.list(user_id).await?;
        let mut definition = existing
            .iter()
            .find(|d| &d.id == id)
            .cloned()
            .ok_or_else(|| CustomHabitNotFound::new(id.as_str()))?;

        if let Some(name) = patch.name {
            definition.name = catalog_rules::validate_name(&name, &existing, Some(id))?;
        }
        if let Some(icon) = patch.icon {
            definition.icon = icon;
        }
        if let Some(category) = patch.category {
            definition.category = category;
        }
        if patch.description.is_some() {
            definition.description = patch.description;
        }
        if patch.detail.is_some() {
            definition.detail = patch.detail;
        }
        if let Some(minutes) = patch.life_minutes {
            definition.rewards.life_days = catalog_rules::validate_reward(
                "lifeMinutes",
                Some(minutes),
            )? / catalog_rules::MINUTES_PER_DAY;
        }
        if let Some(value) = patch.medical_savings {
            definition.rewards.medical_savings =
                catalog_rules::validate_reward("medicalSavings", Some(value))?;
        }
        if let Some(value) = patch.skill_assets {
            definition.rewards.skill_assets =
                catalog_rules::validate_reward("skillAssets", Some(value))?;
        }
        if let Some(value) = patch.focus_hours {
            definition.rewards.focus_hours =
                catalog_rules::validate_reward("focusHours", Some(value))?;
        }

        self.custom_habits.update(user_id, definition.clone()).await?;
        debug!(user = user_id, definition = %definition.id, "updated custom habit");
        Ok(definition)
    }

    async fn delete_custom(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError> {
        ensure_user(user_id)?;
        if self.custom_habits.find(user_id, id).await?.is_none() {
            return Err(CustomHabitNotFound::new(id.as_str()));
        }
        self.custom_habits.delete(user_id, id).await?;
        debug!(user = user_id, definition = %id, "deleted custom habit");
        Ok(())
    }
}
