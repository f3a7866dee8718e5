//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. Each `Client` owns one,
//! so tests can swap in a stub and callers can tune the agent without any
//! process-wide default. Non-2xx statuses come back as ordinary responses;
//! only a failed round-trip is an error.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one blocking HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Default transport backed by a `ureq::Agent`.
///
/// The agent keeps its own connection pool, so clones of a `Client` sharing
/// this transport reuse connections.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Transport that aborts any request running longer than `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (request.method, &request.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&request.url), &request.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&request.url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&request.url), &request.headers).send_empty()
            }
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
