use anyhow::{anyhow, Context, Error, Result};
use domino_client::{Client, DatasetId, DatasetName, ProjectId, ProjectName};
use itertools::Itertools;
use log::{error, info};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::missing;
use crate::{config::ProjectEnv, utils::sibling_project_name};

/// What happened to one dataset that needed mounting.
#[derive(Debug)]
pub enum MountOutcome {
    Mounted(DatasetId),
    /// The SDTM project has no dataset with this name.
    MissingFromSibling,
    Failed(Error),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MountReport {
    pub mounted: Vec<DatasetName>,
    pub missing: Vec<DatasetName>,
    pub failed: Vec<DatasetName>,
}

/// Mount every required dataset that is not mounted yet, taking it from the
/// project's SDTM sibling.
///
/// Failing to mount one dataset is logged and does not stop the others.
pub fn mount_datasets(
    client: &Client,
    project: &ProjectEnv,
    required: &BTreeSet<DatasetName>,
) -> Result<MountReport> {
    let mounted = mounted_dataset_names(client, &project.project_id)?;

    let sibling_name = sibling_project_name(&project.project_name);
    let sibling_id = find_project_id(client, &sibling_name)?;
    let sibling_datasets: BTreeMap<DatasetName, DatasetId> = client
        .get_project_datasets(&sibling_id)
        .with_context(|| format!("Operation to list datasets of project `{sibling_name}` has failed."))?
        .into_iter()
        .map(|dataset| (dataset.name, dataset.id))
        .collect();

    let mut report = MountReport::default();
    for name in missing(required, &mounted) {
        match mount_dataset(client, &project.project_id, name, &sibling_datasets) {
            MountOutcome::Mounted(dataset_id) => {
                info!(
                    "Mounted dataset `{}` [id: {}] from project `{}`",
                    name, dataset_id, sibling_name
                );
                report.mounted.push(name.clone());
            }
            MountOutcome::MissingFromSibling => {
                error!(
                    "Could not find required dataset `{}` in `{}` datasets: [{}]",
                    name,
                    sibling_name,
                    sibling_datasets.keys().join(", ")
                );
                report.missing.push(name.clone());
            }
            MountOutcome::Failed(error) => {
                error!("Could not mount dataset `{}`: {:#}", name, error);
                report.failed.push(name.clone());
            }
        }
    }

    info!(
        "Mounts: {} mounted, {} already mounted, {} missing from `{}`, {} failed",
        report.mounted.len(),
        required.intersection(&mounted).count(),
        report.missing.len(),
        sibling_name,
        report.failed.len()
    );
    Ok(report)
}

pub fn mount_dataset(
    client: &Client,
    project_id: &ProjectId,
    name: &DatasetName,
    sibling_datasets: &BTreeMap<DatasetName, DatasetId>,
) -> MountOutcome {
    let Some(dataset_id) = sibling_datasets.get(name) else {
        return MountOutcome::MissingFromSibling;
    };
    match client.mount_dataset(project_id, dataset_id) {
        Ok(()) => MountOutcome::Mounted(dataset_id.clone()),
        Err(error) => MountOutcome::Failed(Error::new(error)),
    }
}

/// Names of the datasets currently shared into the project.
fn mounted_dataset_names(client: &Client, project_id: &ProjectId) -> Result<BTreeSet<DatasetName>> {
    let dataset_ids = client
        .get_shared_dataset_ids(project_id)
        .context("Operation to list the project's mounted datasets has failed.")?;

    dataset_ids
        .iter()
        .map(|dataset_id| {
            client
                .get_dataset(dataset_id)
                .map(|dataset| dataset.name)
                .with_context(|| format!("Operation to get mounted dataset `{dataset_id}` has failed."))
        })
        .collect()
}

fn find_project_id(client: &Client, project_name: &ProjectName) -> Result<ProjectId> {
    let projects = client
        .get_projects()
        .context("Operation to list projects has failed.")?;
    let num_projects = projects.len();

    // Later entries win when names repeat.
    let mut project_ids: HashMap<ProjectName, ProjectId> = projects
        .into_iter()
        .map(|project| (project.name, project.id))
        .collect();

    project_ids.remove(project_name).ok_or_else(|| {
        anyhow!("Could not find project `{project_name}` among {num_projects} visible projects.")
    })
}
