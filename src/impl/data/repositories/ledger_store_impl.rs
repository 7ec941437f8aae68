use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::Utc;
use fractic_server_error::ServerError;
use tokio::sync::watch;

use crate::{
    data::{
        datasources::memory_store_datasource::{MemoryStoreDatasource, UserDocuments},
        models::{asset_aggregate_model::AssetAggregateModel, habit_event_model::HabitEventModel},
    },
    domain::repositories::ledger_store::{LedgerBatch, LedgerStore},
    entities::{AssetAggregate, HabitEvent, HabitEventId, LedgerSnapshot, ValueVector},
    errors::{CorruptDocument, EventNotFound, StoreRejected},
};

/// `LedgerStore` backed by the in-memory document datasource. Batches are
/// validated in full before any document is touched, so a rejected batch
/// leaves both the event log and the aggregate unchanged.
pub struct MemoryLedgerStore {
    datasource: Arc<MemoryStoreDatasource>,
    watchers: Mutex<HashMap<String, watch::Sender<LedgerSnapshot>>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::with_datasource(Arc::new(MemoryStoreDatasource::new()))
    }

    pub(crate) fn with_datasource(datasource: Arc<MemoryStoreDatasource>) -> Self {
        Self {
            datasource,
            watchers: Mutex::new(HashMap::new()),
        }
    }

    fn publish(&self, user_id: &str, snapshot: LedgerSnapshot) {
        let watchers = self.watchers.lock().expect("watcher lock poisoned");
        if let Some(tx) = watchers.get(user_id) {
            // Send only fails when every receiver is gone; nothing to do.
            let _ = tx.send(snapshot);
        }
    }
}

impl Default for MemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_events(docs: &UserDocuments) -> Result<Vec<HabitEvent>, ServerError> {
    let mut events = docs
        .habit_events
        .iter()
        .map(|(_, doc)| {
            serde_json::from_value::<HabitEventModel>(doc.clone())
                .map(HabitEvent::from)
                .map_err(|e| CorruptDocument::with_debug("habits", &e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    // Most recent creation first; stable, so same-instant events keep their
    // stored order.
    events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(events)
}

fn decode_aggregate(docs: &UserDocuments) -> Result<AssetAggregate, ServerError> {
    if docs.aggregate.is_null() {
        return Ok(AssetAggregate::default());
    }
    serde_json::from_value::<AssetAggregateModel>(docs.aggregate.clone())
        .map(AssetAggregate::from)
        .map_err(|e| CorruptDocument::with_debug("users", &e))
}

fn snapshot(docs: &UserDocuments) -> Result<LedgerSnapshot, ServerError> {
    Ok(LedgerSnapshot {
        events: decode_events(docs)?,
        assets: decode_aggregate(docs)?,
    })
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn commit_batch(&self, user_id: &str, batch: LedgerBatch) -> Result<(), ServerError> {
        if batch.is_empty() {
            return Ok(());
        }
        // A reference repeated within one batch still deletes one document,
        // so it must count once in the delta as well.
        let mut deletes: Vec<&HabitEventId> = Vec::new();
        for id in &batch.deletes {
            if !deletes.contains(&id) {
                deletes.push(id);
            }
        }
        let fresh = self.datasource.with_user_mut(user_id, |docs| {
            // Stage every fallible step before the first mutation.
            let mut delta = ValueVector::default();
            for event in &batch.creates {
                delta += event.value;
            }
            for id in &deletes {
                let (_, doc) = docs
                    .habit_events
                    .iter()
                    .find(|(doc_id, _)| doc_id == id.as_str())
                    .ok_or_else(|| EventNotFound::new(id.as_str()))?;
                // Decrement by the snapshotted value on the stored event,
                // never a re-lookup of the current definition.
                let stored = serde_json::from_value::<HabitEventModel>(doc.clone())
                    .map_err(|e| CorruptDocument::with_debug("habits", &e))?;
                delta -= stored.value;
            }
            let mut aggregate = decode_aggregate(docs)?;
            aggregate.assets += delta;
            aggregate.last_updated = Some(Utc::now());
            let aggregate_doc = serde_json::to_value(AssetAggregateModel::from(&aggregate))
                .map_err(|e| StoreRejected::with_debug("failed to encode aggregate document", &e))?;
            let created_docs = batch
                .creates
                .iter()
                .map(|event| {
                    serde_json::to_value(HabitEventModel::from(event))
                        .map(|doc| (event.id.as_str().to_string(), doc))
                        .map_err(|e| {
                            StoreRejected::with_debug("failed to encode habit event document", &e)
                        })
                })
                .collect::<Result<Vec<_>, ServerError>>()?;

            // Apply as one unit.
            docs.habit_events
                .retain(|(doc_id, _)| !deletes.iter().any(|id| id.as_str() == doc_id));
            docs.habit_events.extend(created_docs);
            docs.aggregate = aggregate_doc;
            snapshot(docs)
        })?;
        self.publish(user_id, fresh);
        Ok(())
    }

    async fn events(&self, user_id: &str) -> Result<Vec<HabitEvent>, ServerError> {
        self.datasource.with_user(user_id, decode_events)
    }

    async fn aggregate(&self, user_id: &str) -> Result<AssetAggregate, ServerError> {
        self.datasource.with_user(user_id, decode_aggregate)
    }

    async fn subscribe(&self, user_id: &str) -> watch::Receiver<LedgerSnapshot> {
        let current = self
            .datasource
            .with_user(user_id, snapshot)
            .unwrap_or_default();
        let mut watchers = self.watchers.lock().expect("watcher lock poisoned");
        watchers
            .entry(user_id.to_string())
            .or_insert_with(|| watch::channel(current).0)
            .subscribe()
    }
}
