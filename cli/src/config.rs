use anyhow::{anyhow, Context, Result};
use domino_client::{DatasetName, ProjectId, ProjectName, Token};
use log::debug;
use maplit::{btreemap, btreeset};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    env,
    fs::File,
    io::BufReader,
    path::Path,
};
use url::Url;

pub const API_KEY_ENV_VARIABLE_NAME: &str = "DOMINO_USER_API_KEY";
pub const API_HOST_ENV_VARIABLE_NAME: &str = "DOMINO_API_HOST";
pub const PROJECT_ID_ENV_VARIABLE_NAME: &str = "DOMINO_PROJECT_ID";
pub const PROJECT_OWNER_ENV_VARIABLE_NAME: &str = "DOMINO_PROJECT_OWNER";
pub const PROJECT_NAME_ENV_VARIABLE_NAME: &str = "DOMINO_PROJECT_NAME";

/// The project a run works on, as described by the environment Domino sets up
/// for runs and workspaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEnv {
    pub api_key: Token,
    pub api_host: Url,
    pub project_id: ProjectId,
    pub project_owner: String,
    pub project_name: ProjectName,
}

impl ProjectEnv {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Every variable is required; the first missing one fails the lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| anyhow!("Environment variable `{name}` must be set."))
        };

        let api_key = Token(require(API_KEY_ENV_VARIABLE_NAME)?);
        let api_host = require(API_HOST_ENV_VARIABLE_NAME)?;
        let api_host = Url::parse(&api_host).with_context(|| {
            format!("Environment variable `{API_HOST_ENV_VARIABLE_NAME}` is not a valid URL: `{api_host}`")
        })?;
        let project_id = ProjectId(require(PROJECT_ID_ENV_VARIABLE_NAME)?);
        let project_owner = require(PROJECT_OWNER_ENV_VARIABLE_NAME)?;
        let project_name = ProjectName(require(PROJECT_NAME_ENV_VARIABLE_NAME)?);

        Ok(Self {
            api_key,
            api_host,
            project_id,
            project_owner,
            project_name,
        })
    }

    /// `<owner>/<name>`
    pub fn project_path(&self) -> String {
        format!("{}/{}", self.project_owner, self.project_name)
    }
}

/// Datasets a project must own, with their descriptions, and datasets it must
/// have mounted from its SDTM project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Requirements {
    pub datasets: BTreeMap<DatasetName, String>,
    pub mounts: BTreeSet<DatasetName>,
}

impl Default for Requirements {
    fn default() -> Self {
        let name = |name: &str| DatasetName(name.to_owned());
        Self {
            datasets: btreemap! {
                name("METADATA") => "Internal metadata".to_owned(),
                name("COMPARE") => "PROC COMPARE datasets for QC".to_owned(),
                name("ADAM") => "ADAM is created using SDTM data for production".to_owned(),
                name("ADAMQC") => "ADAMQC is created using SDTM data for qc".to_owned(),
                name("TFL") => "TFL is created using ADAM for production tfls".to_owned(),
                name("TFLQC") => "TFLQC is created using ADAM for qc tfls".to_owned(),
            },
            mounts: btreeset! {
                name("SDTMBLIND"),
                name("METADATA"),
            },
        }
    }
}

pub fn read_requirements(path: impl AsRef<Path>) -> Result<Requirements> {
    debug!("Reading requirements file at `{}`", path.as_ref().display());
    let file = File::open(&path).with_context(|| {
        format!(
            "Could not open requirements file `{}`",
            path.as_ref().display()
        )
    })?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| {
        format!(
            "Could not parse requirements file `{}`",
            path.as_ref().display()
        )
    })
}
