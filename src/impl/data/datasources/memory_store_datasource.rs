use std::{
    collections::{BTreeSet, HashMap},
    sync::Mutex,
};

use serde_json::Value;

/// In-memory stand-in for the hosted document database: per-user document
/// collections plus the per-user aggregate document.
///
/// All access runs under one lock, so a closure passed to `with_user_mut`
/// observes and applies its changes as a single atomic step.
pub(crate) struct MemoryStoreDatasource {
    users: Mutex<HashMap<String, UserDocuments>>,
}

#[derive(Default)]
pub(crate) struct UserDocuments {
    /// Habit event documents in creation order, keyed by event id.
    pub(crate) habit_events: Vec<(String, Value)>,
    /// Custom habit documents in insertion order, keyed by definition id.
    pub(crate) custom_habits: Vec<(String, Value)>,
    /// Built-in definition ids the user has hidden.
    pub(crate) disabled_habits: BTreeSet<String>,
    /// The aggregate document; `Null` until the first committed batch.
    pub(crate) aggregate: Value,
}

impl MemoryStoreDatasource {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn with_user<R>(&self, user_id: &str, f: impl FnOnce(&UserDocuments) -> R) -> R {
        let mut users = self.users.lock().expect("memory store lock poisoned");
        f(users.entry(user_id.to_string()).or_default())
    }

    pub(crate) fn with_user_mut<R>(
        &self,
        user_id: &str,
        f: impl FnOnce(&mut UserDocuments) -> R,
    ) -> R {
        let mut users = self.users.lock().expect("memory store lock poisoned");
        f(users.entry(user_id.to_string()).or_default())
    }
}
