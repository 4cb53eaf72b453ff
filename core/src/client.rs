//! `DivisionClient`: request building, response parsing, and the blocking
//! round trip that joins them.
//!
//! # Design
//! The client holds a resolved `base_url` and a `ureq::Agent`. Both are
//! immutable after construction, so one client can be cloned freely and
//! shared across threads. `build_*` and `parse_*` never touch the network;
//! `divide` and `health` are `build` → `transport::execute` → `parse`.

use std::fmt;

use ureq::Agent;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON, CONTENT_TYPE};
use crate::transport;
use crate::types::{DividedName, DivisionRequest, DivisionResponse, HealthStatus, MODE_BASIC, MODE_GBDT};

/// Blocking client for the division API.
///
/// Holds the resolved base URL and a `ureq::Agent` whose connection pool is
/// reused across calls. Neither changes after construction, so the client is
/// `Clone + Send + Sync`; clones share the pool.
#[derive(Clone)]
pub struct DivisionClient {
    base_url: String,
    agent: Agent,
}

impl DivisionClient {
    /// Client for `base_url`; an empty string selects `DEFAULT_BASE_URL`.
    pub fn new(base_url: &str) -> Self {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            base_url: config.resolved_base_url(),
            agent: transport::agent(config.timeout),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Divide `names` using the server-side algorithm selected by `mode`.
    ///
    /// An empty `mode` means `"basic"`. On success the result holds one
    /// entry per input name, in input order.
    #[tracing::instrument(skip(self, names), fields(count = names.len()))]
    pub fn divide<S: AsRef<str>>(&self, names: &[S], mode: &str) -> Result<Vec<DividedName>, ApiError> {
        let req = self.build_divide(names, mode)?;
        tracing::debug!(url = %req.url, "dispatching division request");
        let response = transport::execute(&self.agent, &req)?;
        tracing::debug!(status = response.status, "division response received");
        self.parse_divide(response)
    }

    pub fn divide_basic<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<DividedName>, ApiError> {
        self.divide(names, MODE_BASIC)
    }

    pub fn divide_gbdt<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<DividedName>, ApiError> {
        self.divide(names, MODE_GBDT)
    }

    #[tracing::instrument(skip(self))]
    pub fn health(&self) -> Result<HealthStatus, ApiError> {
        let req = self.build_health();
        let response = transport::execute(&self.agent, &req)?;
        self.parse_health(response)
    }

    pub fn build_divide<S: AsRef<str>>(&self, names: &[S], mode: &str) -> Result<HttpRequest, ApiError> {
        let input = DivisionRequest::new(names, mode);
        let body = serde_json::to_string(&input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/divide", self.base_url),
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body: Some(body),
        })
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/health", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_divide(&self, response: HttpResponse) -> Result<Vec<DividedName>, ApiError> {
        check_status(&response)?;
        let parsed: DivisionResponse =
            serde_json::from_slice(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(parsed.divided_names)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<HealthStatus, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

impl fmt::Debug for DivisionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DivisionClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Default for DivisionClient {
    fn default() -> Self {
        Self::with_config(ClientConfig::default())
    }
}

/// Only 200 counts as success; every other code is reported verbatim.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    tracing::warn!(status = response.status, "division API returned non-200 status");
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
