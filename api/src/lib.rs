#![deny(clippy::all)]
mod error;
pub mod resources;

use log::debug;
use reqwest::{
    blocking::Client as HttpClient,
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use url::Url;

use crate::resources::{
    dataset::{
        GetAvailableResponse as GetAvailableDatasetsResponse, GetResponse as GetDatasetResponse,
    },
    project::GetProjectsResponse,
    shared_dataset::{GetResponse as GetSharedDatasetsResponse, MountRequest},
};

pub use crate::{
    error::{Error, Result},
    resources::{
        dataset::{Dataset, DatasetSummary, Id as DatasetId, Name as DatasetName, NewDataset},
        project::{Id as ProjectId, Project, ProjectName},
        ApiResponse, ResponseBody,
    },
};

/// Header carrying the user's API key on every request.
pub const API_KEY_HEADER: &str = "x-domino-api-key";

/// Page size used when listing projects. Only the first page is ever read.
pub const PROJECTS_LIMIT: usize = 999;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token(pub String);

pub struct Config {
    pub endpoint: Url,
    pub token: Token,
}

#[derive(Debug)]
pub struct Client {
    endpoints: Endpoints,
    http_client: HttpClient,
    headers: HeaderMap,
}

impl Client {
    /// Create a new API client.
    pub fn new(config: Config) -> Result<Client> {
        let http_client = build_http_client()?;
        let headers = build_headers(&config)?;
        let endpoints = Endpoints::new(config.endpoint)?;
        Ok(Client {
            endpoints,
            http_client,
            headers,
        })
    }

    /// List the datasets owned by a project.
    pub fn get_datasets(&self, project_id: &ProjectId) -> Result<Vec<DatasetSummary>> {
        self.get(self.endpoints.datasets_v4_by_project(project_id))
    }

    /// Create a new dataset in a project.
    ///
    /// Only the status is checked: the body of a successful creation is not
    /// read, and may well be empty.
    pub fn create_dataset(
        &self,
        project_id: &ProjectId,
        dataset_name: &DatasetName,
        description: &str,
    ) -> Result<()> {
        self.call(
            Method::POST,
            self.endpoints.dataset_v4.clone(),
            Some(&NewDataset {
                dataset_name,
                description,
                project_id,
            }),
        )?
        .error_for_status()?;
        Ok(())
    }

    /// Ids of the datasets shared into (mounted in) a project.
    pub fn get_shared_dataset_ids(&self, project_id: &ProjectId) -> Result<Vec<DatasetId>> {
        Ok(self
            .get::<GetSharedDatasetsResponse>(self.endpoints.shared_datasets(project_id)?)?
            .dataset
            .shared_dataset_ids)
    }

    /// Get a dataset by id.
    pub fn get_dataset(&self, dataset_id: &DatasetId) -> Result<Dataset> {
        Ok(self
            .get::<GetDatasetResponse>(self.endpoints.dataset_by_id(dataset_id)?)?
            .dataset)
    }

    /// List visible projects, up to [`PROJECTS_LIMIT`] of them.
    pub fn get_projects(&self) -> Result<Vec<Project>> {
        Ok(self
            .get::<GetProjectsResponse>(self.endpoints.projects.clone())?
            .projects)
    }

    /// List the datasets owned by a project, as full dataset records.
    pub fn get_project_datasets(&self, project_id: &ProjectId) -> Result<Vec<Dataset>> {
        Ok(self
            .get::<GetAvailableDatasetsResponse>(self.endpoints.datasets_by_project(project_id))?
            .datasets
            .into_iter()
            .map(|entry| entry.dataset)
            .collect())
    }

    /// Share an existing dataset into a project.
    pub fn mount_dataset(&self, project_id: &ProjectId, dataset_id: &DatasetId) -> Result<()> {
        self.call(
            Method::POST,
            self.endpoints.shared_datasets(project_id)?,
            Some(&MountRequest { dataset_id }),
        )?
        .error_for_status()?;
        Ok(())
    }

    /// Send an authenticated request and read back whatever the server answers.
    ///
    /// The status code is returned as-is; a non-2xx response is not an error at
    /// this level.
    pub fn call<RequestT>(
        &self,
        method: Method,
        url: Url,
        body: Option<&RequestT>,
    ) -> Result<ApiResponse>
    where
        RequestT: Serialize + ?Sized,
    {
        debug!("Attempting {} `{}`", method, url);
        let request = self
            .http_client
            .request(method.clone(), url.clone())
            .headers(self.headers.clone());
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };

        let http_response = request.send().map_err(|source| Error::ReqwestError {
            source,
            message: format!("{method} operation failed."),
        })?;
        let status = http_response.status();
        let bytes = http_response
            .bytes()
            .map_err(|source| Error::ReqwestError {
                source,
                message: format!("Could not read the response body of {method} `{url}`."),
            })?;
        debug!("{} `{}` returned {}", method, url, status);

        Ok(ApiResponse {
            url,
            status,
            body: ResponseBody::from_bytes(bytes.to_vec()),
        })
    }

    fn get<SuccessT>(&self, url: Url) -> Result<SuccessT>
    where
        SuccessT: DeserializeOwned,
    {
        self.call(Method::GET, url, None::<&()>)?
            .error_for_status()?
            .decode()
    }
}

#[derive(Debug)]
struct Endpoints {
    base: Url,
    datasets_v4: Url,
    dataset_v4: Url,
    datasets_v2: Url,
    projects: Url,
}

fn construct_endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut endpoint = base.clone();

    let mut endpoint_segments = endpoint
        .path_segments_mut()
        .map_err(|_| Error::BadEndpoint {
            endpoint: base.clone(),
        })?;

    endpoint_segments.pop_if_empty();
    for segment in segments {
        endpoint_segments.push(segment);
    }

    drop(endpoint_segments);

    Ok(endpoint)
}

fn with_query(mut url: Url, key: &str, value: impl Display) -> Url {
    url.query_pairs_mut().append_pair(key, &value.to_string());
    url
}

impl Endpoints {
    pub fn new(base: Url) -> Result<Self> {
        let datasets_v4 = construct_endpoint(&base, &["v4", "datasetrw", "datasets"])?;
        let dataset_v4 = construct_endpoint(&base, &["v4", "datasetrw", "dataset"])?;
        let datasets_v2 = construct_endpoint(&base, &["api", "datasetrw", "v2", "datasets"])?;
        let projects = with_query(
            construct_endpoint(&base, &["api", "projects", "beta", "projects"])?,
            "limit",
            PROJECTS_LIMIT,
        );

        Ok(Endpoints {
            base,
            datasets_v4,
            dataset_v4,
            datasets_v2,
            projects,
        })
    }

    fn datasets_v4_by_project(&self, project_id: &ProjectId) -> Url {
        with_query(self.datasets_v4.clone(), "projectId", project_id)
    }

    fn datasets_by_project(&self, project_id: &ProjectId) -> Url {
        with_query(self.datasets_v2.clone(), "projectIdsToInclude", project_id)
    }

    fn dataset_by_id(&self, dataset_id: &DatasetId) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &["api", "datasetrw", "v1", "datasets", &dataset_id.0],
        )
    }

    fn shared_datasets(&self, project_id: &ProjectId) -> Result<Url> {
        construct_endpoint(
            &self.base,
            &[
                "api",
                "projects",
                "v1",
                "projects",
                &project_id.0,
                "shared-datasets",
            ],
        )
    }
}

fn build_http_client() -> Result<HttpClient> {
    HttpClient::builder()
        .build()
        .map_err(Error::BuildHttpClient)
}

fn build_headers(config: &Config) -> Result<HeaderMap> {
    let mut api_key = HeaderValue::from_str(&config.token.0).map_err(|_| Error::BadToken)?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
