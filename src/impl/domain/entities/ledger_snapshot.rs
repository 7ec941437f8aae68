use super::{asset_aggregate::AssetAggregate, habit_event::HabitEvent};

/// The most recently observed state of one user's ledger, as pushed by the
/// persistent store's subscription channel. Derived read views recompute
/// from this snapshot; they never mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    /// Most recent creation first.
    pub events: Vec<HabitEvent>,
    pub assets: AssetAggregate,
}
