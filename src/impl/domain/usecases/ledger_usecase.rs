use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fractic_server_error::ServerError;
use tokio::sync::watch;
use tracing::debug;

use crate::{
    domain::{
        logic::{
            catalog_rules, stats_processor::StatsProcessor, trend_processor::TrendProcessor,
        },
        repositories::{
            custom_habit_store::CustomHabitStore,
            ledger_store::{LedgerBatch, LedgerStore},
        },
    },
    entities::{
        AssetAggregate, HabitDefinition, HabitEntry, HabitEvent, HabitEventId, LedgerSnapshot,
        PendingChangeSet, SummaryStats, TrendPoint,
    },
    errors::{InvalidDuration, InvalidEventReference, MissingUserId},
};

/// The authoritative event log and aggregate for one user: the only
/// component permitted to create, delete or sum habit events.
#[async_trait]
pub trait LedgerUsecase: Send + Sync {
    /// Applies a pending change set as one atomic store batch and returns
    /// the committed events. An empty change set is a no-op.
    async fn commit(
        &self,
        user_id: &str,
        changes: PendingChangeSet,
    ) -> Result<Vec<HabitEvent>, ServerError>;

    async fn add_batch(
        &self,
        user_id: &str,
        entries: Vec<HabitEntry>,
    ) -> Result<Vec<HabitEvent>, ServerError>;

    async fn remove_batch(
        &self,
        user_id: &str,
        refs: Vec<HabitEventId>,
    ) -> Result<(), ServerError>;

    /// Events attributed to the given date, most recent creation first.
    async fn events_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HabitEvent>, ServerError>;

    async fn summary_stats(&self, user_id: &str) -> Result<SummaryStats, ServerError>;

    async fn asset_trend(&self, user_id: &str) -> Result<Vec<TrendPoint>, ServerError>;

    async fn assets(&self, user_id: &str) -> Result<AssetAggregate, ServerError>;

    async fn subscribe(&self, user_id: &str) -> watch::Receiver<LedgerSnapshot>;
}

pub(crate) struct LedgerUsecaseImpl<L, C>
where
    L: LedgerStore,
    C: CustomHabitStore,
{
    ledger_store: Arc<L>,
    custom_habits: Arc<C>,
    builtins: Vec<HabitDefinition>,
}

impl<L, C> LedgerUsecaseImpl<L, C>
where
    L: LedgerStore,
    C: CustomHabitStore,
{
    pub(crate) fn new(
        ledger_store: Arc<L>,
        custom_habits: Arc<C>,
        builtins: Vec<HabitDefinition>,
    ) -> Self {
        Self {
            ledger_store,
            custom_habits,
            builtins,
        }
    }
}

#[async_trait]
impl<L, C> LedgerUsecase for LedgerUsecaseImpl<L, C>
where
    L: LedgerStore,
    C: CustomHabitStore,
{
    async fn commit(
        &self,
        user_id: &str,
        changes: PendingChangeSet,
    ) -> Result<Vec<HabitEvent>, ServerError> {
        if user_id.trim().is_empty() {
            return Err(MissingUserId::new());
        }
        if changes.is_empty() {
            return Ok(Vec::new());
        }

        // Pre-flight validation, before any store interaction.
        for removal in &changes.removals {
            if removal.as_str().trim().is_empty() {
                return Err(InvalidEventReference::new());
            }
        }
        for entry in &changes.additions {
            if !(entry.duration.is_finite() && entry.duration > 0.0) {
                return Err(InvalidDuration::new(entry.duration));
            }
        }

        let customs = if changes.additions.is_empty() {
            Vec::new()
        } else {
            self.custom_habits.list(user_id).await?
        };
        let created_at = Utc::now();
        let creates: Vec<HabitEvent> = changes
            .additions
            .into_iter()
            .map(|entry| {
                let definition =
                    catalog_rules::resolve(&self.builtins, &customs, &entry.definition_id);
                let value =
                    catalog_rules::snapshot_value(definition, &entry.definition_id, entry.duration);
                HabitEvent {
                    id: HabitEventId::generate(),
                    definition_id: entry.definition_id,
                    date: entry.date,
                    duration: entry.duration,
                    created_at,
                    value,
                }
            })
            .collect();

        debug!(
            user = user_id,
            creates = creates.len(),
            deletes = changes.removals.len(),
            "committing ledger batch"
        );
        let committed = creates.clone();
        self.ledger_store
            .commit_batch(
                user_id,
                LedgerBatch {
                    creates,
                    deletes: changes.removals,
                },
            )
            .await?;
        Ok(committed)
    }

    async fn add_batch(
        &self,
        user_id: &str,
        entries: Vec<HabitEntry>,
    ) -> Result<Vec<HabitEvent>, ServerError> {
        self.commit(user_id, PendingChangeSet::additions(entries))
            .await
    }

    async fn remove_batch(
        &self,
        user_id: &str,
        refs: Vec<HabitEventId>,
    ) -> Result<(), ServerError> {
        self.commit(user_id, PendingChangeSet::removals(refs))
            .await?;
        Ok(())
    }

    async fn events_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<HabitEvent>, ServerError> {
        // Store order is already most-recent-first.
        Ok(self
            .ledger_store
            .events(user_id)
            .await?
            .into_iter()
            .filter(|event| event.date == date)
            .collect())
    }

    async fn summary_stats(&self, user_id: &str) -> Result<SummaryStats, ServerError> {
        let events = self.ledger_store.events(user_id).await?;
        Ok(StatsProcessor::new(&events).process())
    }

    async fn asset_trend(&self, user_id: &str) -> Result<Vec<TrendPoint>, ServerError> {
        let events = self.ledger_store.events(user_id).await?;
        Ok(TrendProcessor::new(&events).process())
    }

    async fn assets(&self, user_id: &str) -> Result<AssetAggregate, ServerError> {
        self.ledger_store.aggregate(user_id).await
    }

    async fn subscribe(&self, user_id: &str) -> watch::Receiver<LedgerSnapshot> {
        self.ledger_store.subscribe(user_id).await
    }
}
