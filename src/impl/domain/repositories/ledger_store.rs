use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::watch;

use crate::entities::{AssetAggregate, HabitEvent, HabitEventId, LedgerSnapshot};

/// One atomic unit of ledger mutation: event creates and deletes committed
/// together with the matching aggregate update, all-or-nothing.
///
/// The store applies the aggregate change itself: increment by the sum of
/// the created events' values, decrement by the snapshotted values stored on
/// the deleted events. Callers never read-modify-write the aggregate.
#[derive(Debug, Clone, Default)]
pub struct LedgerBatch {
    pub creates: Vec<HabitEvent>,
    pub deletes: Vec<HabitEventId>,
}

impl LedgerBatch {
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.deletes.is_empty()
    }
}

/// Durable, per-user-scoped storage for habit events and the running
/// aggregate. The hosted document database the application deploys against
/// sits behind this seam; an in-memory implementation is provided for local
/// use and tests.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Commits the batch atomically. On failure, neither the event log nor
    /// the aggregate may have changed.
    async fn commit_batch(&self, user_id: &str, batch: LedgerBatch) -> Result<(), ServerError>;

    /// Current event log, most recent creation first.
    async fn events(&self, user_id: &str) -> Result<Vec<HabitEvent>, ServerError>;

    async fn aggregate(&self, user_id: &str) -> Result<AssetAggregate, ServerError>;

    /// Live view of the user's ledger; a fresh snapshot is published after
    /// every committed batch.
    async fn subscribe(&self, user_id: &str) -> watch::Receiver<LedgerSnapshot>;
}
