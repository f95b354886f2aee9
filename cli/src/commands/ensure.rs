use anyhow::{Context, Result};
use domino_client::{Client, DatasetName, ProjectId};
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};

use super::missing;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnsureReport {
    pub created: Vec<DatasetName>,
    pub already_present: usize,
}

/// Create every required dataset the project does not own yet.
///
/// A failed creation stops the run; datasets created before it are kept.
pub fn ensure_datasets(
    client: &Client,
    project_id: &ProjectId,
    required: &BTreeMap<DatasetName, String>,
) -> Result<EnsureReport> {
    let existing: BTreeSet<DatasetName> = client
        .get_datasets(project_id)
        .context("Operation to list the project's datasets has failed.")?
        .into_iter()
        .map(|dataset| {
            debug!("Found dataset `{}` [id: {}]", dataset.name, dataset.id);
            dataset.name
        })
        .collect();

    let to_create = missing(required.keys(), &existing);
    let mut report = EnsureReport {
        created: Vec::with_capacity(to_create.len()),
        already_present: required.len() - to_create.len(),
    };

    for name in to_create {
        let description = &required[name];
        client
            .create_dataset(project_id, name, description)
            .with_context(|| format!("Operation to create dataset `{name}` has failed."))?;
        info!("New dataset `{}` created successfully", name);
        report.created.push(name.clone());
    }

    info!(
        "Datasets: {} created, {} already present",
        report.created.len(),
        report.already_present
    );
    Ok(report)
}
