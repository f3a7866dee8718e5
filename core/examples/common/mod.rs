//! Shared setup for the example programs.

use tracing_subscriber::EnvFilter;
use tremendous::{Client, ClientArgs};

/// Install logging and build a client from `TREMENDOUS_API_KEY` /
/// `TREMENDOUS_PRODUCTION`.
pub fn client_from_env() -> Client {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_key = std::env::var("TREMENDOUS_API_KEY").unwrap_or_else(|_| "YOUR_API_KEY".to_string());
    let production = std::env::var("TREMENDOUS_PRODUCTION")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let client = Client::new(ClientArgs { api_key, production });
    match std::env::var("TREMENDOUS_BASE_URL") {
        Ok(url) => client.with_base_url(&url),
        Err(_) => client,
    }
}
