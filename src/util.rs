use std::sync::Arc;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tokio::sync::watch;

use crate::{
    domain::usecases::{
        catalog_usecase::{CatalogUsecase as _, CatalogUsecaseImpl},
        ledger_usecase::{LedgerUsecase as _, LedgerUsecaseImpl},
    },
    entities::{
        AssetAggregate, CustomHabitDraft, CustomHabitPatch, DefinitionId, HabitDefinition,
        HabitEntry, HabitEvent, HabitEventId, LedgerSnapshot, PendingChangeSet, SummaryStats,
        TrendPoint,
    },
    ext::standard_habits,
    stores::{
        CustomHabitStore, LedgerStore, MemoryCustomHabitStore, MemoryLedgerStore,
        MemoryPreferenceStore, PreferenceStore,
    },
};

/// Top-level entry point: the habit-to-asset ledger for all users, wired
/// against an injected storage strategy. `in_memory()` gives the
/// demonstration configuration; production callers pass their own store
/// implementations backed by the hosted document database.
pub struct LifeStockLedger<L = MemoryLedgerStore, C = MemoryCustomHabitStore, P = MemoryPreferenceStore>
where
    L: LedgerStore,
    C: CustomHabitStore,
    P: PreferenceStore,
{
    ledger: LedgerUsecaseImpl<L, C>,
    catalog: CatalogUsecaseImpl<C, P>,
    preferences: Arc<P>,
}

impl LifeStockLedger {
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryLedgerStore::new()),
            Arc::new(MemoryCustomHabitStore::new()),
            Arc::new(MemoryPreferenceStore::new()),
        )
    }
}

impl<L, C, P> LifeStockLedger<L, C, P>
where
    L: LedgerStore,
    C: CustomHabitStore,
    P: PreferenceStore,
{
    pub fn new(ledger_store: Arc<L>, custom_habits: Arc<C>, preferences: Arc<P>) -> Self {
        let builtins = standard_habits::all();
        Self {
            ledger: LedgerUsecaseImpl::new(ledger_store, custom_habits.clone(), builtins.clone()),
            catalog: CatalogUsecaseImpl::new(custom_habits, preferences.clone(), builtins),
            preferences,
        }
    }

    // Ledger operations.
    // ---

    pub async fn commit(
        &self,
        user_id: &str,
        changes: PendingChangeSet,
    ) -> Result<Vec<HabitEvent>, ServerError> {
        self.ledger.commit(user_id, changes).await
    }

    pub async fn add_batch(
        &self,
        user_id: &str,
        entries: Vec<HabitEntry>,
    ) -> Result<Vec<HabitEvent>, ServerError> {
        self.ledger.add_batch(user_id, entries).await
    }

    pub async fn remove_batch(
        &self,
        user_id: &str,
        refs: Vec<HabitEventId>,
    ) -> Result<(), ServerError> {
        self.ledger.remove_batch(user_id, refs).await
    }

    pub async fn events_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HabitEvent>, ServerError> {
        self.ledger.events_on_date(user_id, date).await
    }

    pub async fn summary_stats(&self, user_id: &str) -> Result<SummaryStats, ServerError> {
        self.ledger.summary_stats(user_id).await
    }

    pub async fn asset_trend(&self, user_id: &str) -> Result<Vec<TrendPoint>, ServerError> {
        self.ledger.asset_trend(user_id).await
    }

    pub async fn assets(&self, user_id: &str) -> Result<AssetAggregate, ServerError> {
        self.ledger.assets(user_id).await
    }

    pub async fn subscribe(&self, user_id: &str) -> watch::Receiver<LedgerSnapshot> {
        self.ledger.subscribe(user_id).await
    }

    // Catalog operations.
    // ---

    pub async fn resolve_definition(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<Option<HabitDefinition>, ServerError> {
        self.catalog.resolve(user_id, id).await
    }

    pub async fn visible_habits(&self, user_id: &str) -> Result<Vec<HabitDefinition>, ServerError> {
        self.catalog.list_visible(user_id).await
    }

    pub async fn create_custom_habit(
        &self,
        user_id: &str,
        draft: CustomHabitDraft,
    ) -> Result<HabitDefinition, ServerError> {
        self.catalog.create_custom(user_id, draft).await
    }

    pub async fn update_custom_habit(
        &self,
        user_id: &str,
        id: &DefinitionId,
        patch: CustomHabitPatch,
    ) -> Result<HabitDefinition, ServerError> {
        self.catalog.update_custom(user_id, id, patch).await
    }

    pub async fn delete_custom_habit(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<(), ServerError> {
        self.catalog.delete_custom(user_id, id).await
    }

    // Preference toggles.
    // ---

    pub async fn disable_habit(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError> {
        self.preferences.disable(user_id, id).await
    }

    pub async fn enable_habit(&self, user_id: &str, id: &DefinitionId) -> Result<(), ServerError> {
        self.preferences.enable(user_id, id).await
    }

    pub async fn is_habit_disabled(
        &self,
        user_id: &str,
        id: &DefinitionId,
    ) -> Result<bool, ServerError> {
        self.preferences.is_disabled(user_id, id).await
    }
}
