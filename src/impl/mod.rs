// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod memory_store_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod asset_aggregate_model;
        pub(crate) mod calendar_date_model;
        pub(crate) mod custom_habit_model;
        pub(crate) mod habit_event_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod custom_habit_store_impl;
        pub(crate) mod ledger_store_impl;
        pub(crate) mod preference_store_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod asset_aggregate;
        pub(crate) mod habit_definition;
        pub(crate) mod habit_event;
        pub(crate) mod ledger_snapshot;
        pub(crate) mod pending_change_set;
        pub(crate) mod summary_stats;
        pub(crate) mod trend_point;
        pub(crate) mod value_vector;
    }
    pub(crate) mod logic {
        pub(crate) mod catalog_rules;
        pub(crate) mod stats_processor;
        pub(crate) mod trend_processor;
    }
    pub(crate) mod repositories {
        pub(crate) mod custom_habit_store;
        pub(crate) mod ledger_store;
        pub(crate) mod preference_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod catalog_usecase;
        pub(crate) mod ledger_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::asset_aggregate::*;
        pub use crate::domain::entities::habit_definition::*;
        pub use crate::domain::entities::habit_event::*;
        pub use crate::domain::entities::ledger_snapshot::*;
        pub use crate::domain::entities::pending_change_set::*;
        pub use crate::domain::entities::summary_stats::*;
        pub use crate::domain::entities::trend_point::*;
        pub use crate::domain::entities::value_vector::*;
    }

    pub mod stores {
        pub use crate::data::repositories::custom_habit_store_impl::*;
        pub use crate::data::repositories::ledger_store_impl::*;
        pub use crate::data::repositories::preference_store_impl::*;
        pub use crate::domain::repositories::custom_habit_store::*;
        pub use crate::domain::repositories::ledger_store::*;
        pub use crate::domain::repositories::preference_store::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::catalog_usecase::*;
        pub use crate::domain::usecases::ledger_usecase::*;
    }
}
