//! HTTP request and response values.
//!
//! # Design
//! Requests and responses are plain owned data. Services build an
//! `HttpRequest`, a `Transport` turns it into an `HttpResponse`, and the
//! service parses that response. Status classification and JSON decoding live
//! here so every operation shares one template.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL including any query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Response with no headers, mostly useful for stub transports.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Reject any status outside `accepted`, keeping the raw body.
    pub fn expect_status(&self, accepted: &[u16]) -> Result<(), ApiError> {
        if accepted.contains(&self.status) {
            return Ok(());
        }
        tracing::warn!(status = self.status, "request rejected by server");
        Err(ApiError::UnexpectedStatus {
            status: self.status,
            body: self.body.clone(),
        })
    }

    /// Decode the JSON body into `T`.
    pub fn decode<T: DeserializeOwned>(&self, operation: &'static str) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|source| ApiError::Decode { operation, source })
    }
}
