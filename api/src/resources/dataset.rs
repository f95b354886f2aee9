use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::resources::project::Id as ProjectId;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl Display for Id {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(pub String);

impl Display for Name {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write!(formatter, "{}", self.0)
    }
}

/// A dataset as described by the dataset read/write service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Dataset {
    pub id: Id,
    pub name: Name,
}

/// The shorter dataset record used by the v4 listing endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatasetSummary {
    #[serde(rename = "datasetId")]
    pub id: Id,
    #[serde(rename = "datasetName")]
    pub name: Name,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDataset<'request> {
    pub dataset_name: &'request Name,
    pub description: &'request str,
    pub project_id: &'request ProjectId,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct GetResponse {
    pub dataset: Dataset,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct GetAvailableResponse {
    pub datasets: Vec<GetResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_dataset_wire_format() {
        let name = Name("ADAM".to_owned());
        let project_id = ProjectId("p-123".to_owned());
        let request = NewDataset {
            dataset_name: &name,
            description: "ADAM is created using SDTM data for production",
            project_id: &project_id,
        };

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({
                "datasetName": "ADAM",
                "description": "ADAM is created using SDTM data for production",
                "projectId": "p-123",
            })
        );
    }

    #[test]
    fn test_dataset_ignores_unknown_fields() {
        let response: GetAvailableResponse = serde_json::from_value(json!({
            "datasets": [
                {
                    "dataset": {
                        "id": "d-1",
                        "name": "SDTMBLIND",
                        "projectId": "p-sdtm",
                        "createdTime": 1690000000000u64,
                    },
                    "projectInfo": { "projectName": "STUDY1_SDTM" }
                },
                { "dataset": { "id": "d-2", "name": "METADATA" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            response.datasets[0].dataset,
            Dataset {
                id: Id("d-1".to_owned()),
                name: Name("SDTMBLIND".to_owned()),
            }
        );
        assert_eq!(response.datasets[1].dataset.name, Name("METADATA".to_owned()));
    }
}
