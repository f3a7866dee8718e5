//! Synchronous client for the Tremendous rewards API.
//!
//! # Overview
//! `Client` holds an API key, a base URL and a transport. Each resource
//! (campaigns, orders, products) is reached through a borrowed service handle
//! whose operations perform exactly one blocking HTTP round-trip.
//!
//! # Design
//! - Every operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`); the composed call runs the request
//!   through the client's `Transport` in between.
//! - The transport is owned per client. `UreqTransport` is the default; tests
//!   inject their own.
//! - Failures are a closed `ApiError` enum: transport, unexpected status,
//!   decode, encode and client-side validation.
//! - List operations return the first page only; pagination is not followed.
//!
//! ```no_run
//! use tremendous::{Client, ClientArgs};
//!
//! let client = Client::new(ClientArgs {
//!     api_key: "YOUR_API_KEY".to_string(),
//!     production: false,
//! });
//! for campaign in client.campaigns().list()? {
//!     println!("{} {}", campaign.id, campaign.name);
//! }
//! # Ok::<(), tremendous::ApiError>(())
//! ```

pub mod campaigns;
pub mod client;
pub mod error;
pub mod http;
pub mod orders;
pub mod products;
pub mod transport;
pub mod types;

pub use campaigns::CampaignsService;
pub use client::{Client, ClientArgs, Environment, PRODUCTION_URL, TESTFLIGHT_URL};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use orders::OrdersService;
pub use products::ProductsService;
pub use transport::{Transport, UreqTransport};
pub use types::{
    Campaign, CreateProduct, CreateProductArgs, ListProductsOptions, Nullable, Order, OrderArgs,
    OrderDelivery, OrderDenomination, OrderPaymentArg, OrderRecipient, Payment, Product, Reward,
    RewardArg,
};
