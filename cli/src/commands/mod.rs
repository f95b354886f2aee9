pub mod ensure;
pub mod mount;

use anyhow::Result;
use domino_client::{Client, DatasetName};
use std::collections::BTreeSet;

use crate::config::{ProjectEnv, Requirements};

/// Create the required datasets, then mount the required SDTM datasets.
pub fn run(client: &Client, project: &ProjectEnv, requirements: &Requirements) -> Result<()> {
    ensure::ensure_datasets(client, &project.project_id, &requirements.datasets)?;
    mount::mount_datasets(client, project, &requirements.mounts)?;
    Ok(())
}

/// Required names which are not in `present`, in ascending order.
fn missing<'a>(
    required: impl IntoIterator<Item = &'a DatasetName>,
    present: &BTreeSet<DatasetName>,
) -> Vec<&'a DatasetName> {
    let mut missing: Vec<_> = required
        .into_iter()
        .filter(|name| !present.contains(*name))
        .collect();
    missing.sort();
    missing.dedup();
    missing
}


#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;
    use pretty_assertions::assert_eq;

    fn names(names: &[&str]) -> Vec<DatasetName> {
        names.iter().map(|name| DatasetName((*name).to_owned())).collect()
    }

    #[test]
    fn test_missing_is_set_difference() {
        let required = names(&["TFL", "ADAM", "METADATA", "COMPARE"]);
        let present: BTreeSet<_> = names(&["METADATA", "OTHER"]).into_iter().collect();

        assert_eq!(
            missing(&required, &present),
            names(&["ADAM", "COMPARE", "TFL"]).iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_when_all_present() {
        let required = btreeset! { DatasetName("METADATA".to_owned()) };
        assert!(missing(&required, &required).is_empty());
    }
}
