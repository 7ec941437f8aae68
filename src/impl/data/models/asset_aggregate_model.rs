use chrono::{DateTime, Utc};

use crate::entities::{AssetAggregate, ValueVector};

/// Wire shape of the per-user aggregate document.
#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssetAggregateModel {
    #[serde(default)]
    pub(crate) assets: ValueVector,
    #[serde(default)]
    pub(crate) last_updated: Option<DateTime<Utc>>,
}

impl From<&AssetAggregate> for AssetAggregateModel {
    fn from(aggregate: &AssetAggregate) -> Self {
        Self {
            assets: aggregate.assets,
            last_updated: aggregate.last_updated,
        }
    }
}

impl From<AssetAggregateModel> for AssetAggregate {
    fn from(model: AssetAggregateModel) -> Self {
        Self {
            assets: model.assets,
            last_updated: model.last_updated,
        }
    }
}
