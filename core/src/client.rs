//! Client configuration, request headers and service handles.
//!
//! # Design
//! `Client` is immutable after construction: an API key, a base URL and an
//! owned `Transport`. Service handles borrow the client, so every operation
//! sees the same configuration and no call mutates shared state. Cloning a
//! client shares its transport.

use std::fmt;
use std::sync::Arc;

use crate::campaigns::CampaignsService;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::orders::OrdersService;
use crate::products::ProductsService;
use crate::transport::{Transport, UreqTransport};

/// Testflight (sandbox) API endpoint.
pub const TESTFLIGHT_URL: &str = "https://testflight.tremendous.com/api/v2";

/// Production API endpoint.
pub const PRODUCTION_URL: &str = "https://api.tremendous.com/api/v2";

const USER_AGENT: &str = concat!("tremendous-rs/", env!("CARGO_PKG_VERSION"));

/// Which hosted API a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Testflight,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Testflight => TESTFLIGHT_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }
}

impl From<bool> for Environment {
    fn from(production: bool) -> Self {
        if production {
            Environment::Production
        } else {
            Environment::Testflight
        }
    }
}

/// Arguments for `Client::new`.
#[derive(Clone, Default)]
pub struct ClientArgs {
    /// Key sent as the bearer token on every request.
    pub api_key: String,
    /// Use the production API instead of testflight.
    pub production: bool,
}

impl fmt::Debug for ClientArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientArgs")
            .field("api_key", &"<redacted>")
            .field("production", &self.production)
            .finish()
    }
}

/// Entry point for the Tremendous API.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client using the default `ureq` transport.
    pub fn new(args: ClientArgs) -> Self {
        Self::with_transport(args, UreqTransport::default())
    }

    pub fn with_transport(args: ClientArgs, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: Environment::from(args.production).base_url().to_string(),
            api_key: args.api_key,
            transport: Arc::new(transport),
        }
    }

    /// Point the client at another API root, such as a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Authorization".to_string(), format!("Bearer {}", self.api_key)),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ]
    }

    pub fn campaigns(&self) -> CampaignsService<'_> {
        CampaignsService::new(self)
    }

    pub fn orders(&self) -> OrdersService<'_> {
        OrdersService::new(self)
    }

    pub fn products(&self) -> ProductsService<'_> {
        ProductsService::new(self)
    }

    /// Request for `path` (relative to the base URL) with the standard headers.
    pub(crate) fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: self.headers(),
            body,
        }
    }

    pub(crate) fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        tracing::debug!(status = response.status, url = %request.url, "received response");
        Ok(response)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
