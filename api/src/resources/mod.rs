pub mod dataset;
pub mod project;
pub mod shared_dataset;

use crate::error::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Body of a response, in the most structured form it could be read as.
///
/// Some endpoints answer with JSON, some with plain text and some with nothing
/// at all, so the body is kept as whichever of these it turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Raw(Vec<u8>),
    Empty,
}

impl ResponseBody {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return ResponseBody::Empty;
        }
        if let Ok(json) = serde_json::from_slice(&bytes) {
            return ResponseBody::Json(json);
        }
        match String::from_utf8(bytes) {
            Ok(text) => ResponseBody::Text(text),
            Err(error) => ResponseBody::Raw(error.into_bytes()),
        }
    }

    fn describe(&self) -> String {
        match self {
            ResponseBody::Json(json) => json.to_string(),
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Raw(bytes) => format!("<{} bytes of binary data>", bytes.len()),
            ResponseBody::Empty => "<empty body>".to_owned(),
        }
    }
}

/// A response as returned by [`Client::call`](crate::Client::call). The status
/// code is recorded but not acted upon.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: Url,
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Decode the body into a typed record. Anything other than a JSON body of
    /// the expected shape is reported as [`Error::BadResponse`].
    pub fn decode<SuccessT: DeserializeOwned>(self) -> Result<SuccessT> {
        match self.body {
            ResponseBody::Json(json) => {
                serde_json::from_value(json).map_err(|error| Error::BadResponse {
                    url: self.url,
                    status_code: self.status,
                    message: error.to_string(),
                })
            }
            body => Err(Error::BadResponse {
                url: self.url,
                status_code: self.status,
                message: format!("expected a JSON body, got: {}", body.describe()),
            }),
        }
    }

    /// Turn a non-2xx response into [`Error::Api`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(Error::Api {
                message: api_error_message(&self.body),
                url: self.url,
                status_code: self.status,
            })
        }
    }
}

fn api_error_message(body: &ResponseBody) -> String {
    // Error payloads usually carry a `message` field; fall back to the whole body.
    match body {
        ResponseBody::Json(json) => json
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| body.describe()),
        _ => body.describe(),
    }
}
