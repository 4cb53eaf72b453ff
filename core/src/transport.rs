//! Executes `HttpRequest` values over a `ureq::Agent`.
//!
//! Status codes are returned as data (`http_status_as_error(false)`), so the
//! client alone decides what a non-200 means. A failure before the response
//! head arrives is a `TransportError`; a failure while draining a 200 body is
//! a `ResponseReadError`.
//!
//! A 200 body is read in full with no size cap. Any other body is only
//! diagnostic: at most `MAX_ERROR_BODY` bytes are kept and read errors are
//! swallowed, so the status code always reaches the caller.

use std::io::Read;
use std::time::Duration;

use ureq::Agent;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub(crate) const MAX_ERROR_BODY: u64 = 64 * 1024;

pub(crate) fn agent(timeout: Option<Duration>) -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(timeout)
        .build()
        .new_agent()
}

pub(crate) fn execute(agent: &Agent, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match req.method {
        HttpMethod::Get => {
            let mut builder = agent.get(&req.url);
            for (key, value) in &req.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            builder.call()
        }
        HttpMethod::Post => {
            let mut builder = agent.post(&req.url);
            for (key, value) in &req.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            match &req.body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    };
    let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    let body = if status == 200 {
        response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| ApiError::ResponseReadError(e.to_string()))?
    } else {
        let mut buf = Vec::new();
        if let Err(e) = response.body_mut().as_reader().take(MAX_ERROR_BODY).read_to_end(&mut buf) {
            tracing::debug!(status, error = %e, "error body truncated");
        }
        buf
    };

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
