use serde::{Deserialize, Serialize};

use crate::resources::dataset::Id as DatasetId;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SharedDatasets {
    pub shared_dataset_ids: Vec<DatasetId>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct GetResponse {
    pub dataset: SharedDatasets,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MountRequest<'request> {
    pub dataset_id: &'request DatasetId,
}
