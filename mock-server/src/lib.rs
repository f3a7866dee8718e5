//! In-memory imitation of the Tremendous REST API.
//!
//! Campaigns are seeded and read-only. Orders and products can be created;
//! everything lives in one `RwLock`ed store per router. Every route requires
//! `Authorization: Bearer <MOCK_API_KEY>`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Bearer token accepted by the mock server.
pub const MOCK_API_KEY: &str = "TEST_API_KEY";

/// Funding source accepted when creating orders.
pub const FUNDING_SOURCE: &str = "BALANCE";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub object: String,
    #[serde(skip)]
    pub country: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Denomination {
    pub denomination: f64,
    pub currency_code: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Delivery {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Recipient {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub funding_source_id: String,
    pub amount: f64,
    pub currency_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    pub id: String,
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub value: Denomination,
    pub delivery: Delivery,
    pub recipient: Recipient,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub external_id: Option<String>,
    pub campaign_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub payment: Payment,
    pub rewards: Vec<Reward>,
}

#[derive(Deserialize)]
pub struct CreateOrder {
    pub campaign_id: Option<String>,
    pub external_id: Option<String>,
    pub payment: Option<PaymentInput>,
    pub reward: RewardInput,
}

#[derive(Deserialize)]
pub struct PaymentInput {
    pub funding_source_id: Option<String>,
}

#[derive(Deserialize)]
pub struct RewardInput {
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub products: Option<Vec<String>>,
    pub value: Denomination,
    #[serde(default)]
    pub delivery: Delivery,
    #[serde(default)]
    pub recipient: Recipient,
}

#[derive(Deserialize)]
pub struct CreateProductEnvelope {
    pub product: CreateProduct,
}

#[derive(Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Deserialize)]
pub struct ProductFilter {
    pub country: Option<String>,
}

#[derive(Default)]
pub struct Store {
    pub campaigns: Vec<Campaign>,
    pub orders: Vec<Order>,
    pub products: Vec<Product>,
}

impl Store {
    /// Store holding the fixed campaigns and products every router starts with.
    pub fn seeded() -> Self {
        let campaign = |id: &str, name: &str, status: &str| Campaign {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} rewards"),
            status: status.to_string(),
        };
        let product = |id: &str, name: &str, brand: &str, price: f64, currency: &str, country: &str| Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            description: format!("{brand} gift card"),
            price,
            currency: currency.to_string(),
            object: "product".to_string(),
            country: country.to_string(),
        };
        Self {
            campaigns: vec![
                campaign("CAMP1", "Summer", "active"),
                campaign("CAMP2", "Winter", "archived"),
            ],
            orders: Vec::new(),
            products: vec![
                product("PRD1", "Coffee card", "Beans", 25.0, "USD", "US"),
                product("PRD2", "Book voucher", "Pages", 30.0, "CAD", "CA"),
                product("PRD3", "Movie ticket", "Screens", 15.0, "USD", "US"),
            ],
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    let api = Router::new()
        .route("/campaigns", get(list_campaigns))
        .route("/campaigns/{id}", get(get_campaign))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .with_state(db);
    Router::new().nest("/api/v2", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "errors": { "message": message } })))
}

fn authorize(headers: &HeaderMap) -> ApiResult<()> {
    let expected = format!("Bearer {MOCK_API_KEY}");
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, "Invalid API key")),
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_uppercase()
}

async fn list_campaigns(State(db): State<Db>, headers: HeaderMap) -> ApiResult<Json<Value>> {
    authorize(&headers)?;
    let store = db.read().await;
    Ok(Json(json!({ "campaigns": store.campaigns })))
}

async fn get_campaign(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    authorize(&headers)?;
    let store = db.read().await;
    store
        .campaigns
        .iter()
        .find(|c| c.id == id)
        .map(|c| Json(json!({ "campaign": c })))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Resource not found"))
}

async fn list_orders(State(db): State<Db>, headers: HeaderMap) -> ApiResult<Json<Value>> {
    authorize(&headers)?;
    let store = db.read().await;
    Ok(Json(json!({ "orders": store.orders })))
}

async fn get_order(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    authorize(&headers)?;
    let store = db.read().await;
    store
        .orders
        .iter()
        .find(|o| o.id == id)
        .map(|o| Json(json!({ "order": o })))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Resource not found"))
}

async fn create_order(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateOrder>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    authorize(&headers)?;
    let funding_source = input
        .payment
        .and_then(|p| p.funding_source_id)
        .unwrap_or_default();
    if funding_source != FUNDING_SOURCE {
        return Err(error(StatusCode::BAD_REQUEST, "Unknown funding source"));
    }

    let mut store = db.write().await;
    let campaign_id = input.reward.campaign_id.or(input.campaign_id);
    if let Some(id) = &campaign_id {
        if !store.campaigns.iter().any(|c| &c.id == id) {
            return Err(error(StatusCode::BAD_REQUEST, "Unknown campaign"));
        }
    }
    if let Some(products) = &input.reward.products {
        if products.iter().any(|id| !store.products.iter().any(|p| &p.id == id)) {
            return Err(error(StatusCode::BAD_REQUEST, "Unknown product"));
        }
    }

    let now = Utc::now();
    let order_id = new_id();
    let mut delivery = input.reward.delivery;
    delivery.status = "SCHEDULED".to_string();
    if delivery.method.eq_ignore_ascii_case("LINK") {
        delivery.link = format!("https://testflight.tremendous.com/rewards/{order_id}");
    }
    let order = Order {
        id: order_id.clone(),
        external_id: input.external_id,
        campaign_id,
        created_at: now,
        status: "EXECUTED".to_string(),
        payment: Payment {
            funding_source_id: funding_source,
            amount: input.reward.value.denomination,
            currency_code: input.reward.value.currency_code.clone(),
        },
        rewards: vec![Reward {
            id: new_id(),
            order_id,
            created_at: now,
            value: input.reward.value,
            delivery,
            recipient: input.reward.recipient,
        }],
    };
    store.orders.push(order.clone());
    Ok((StatusCode::CREATED, Json(json!({ "order": order }))))
}

async fn list_products(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(filter): Query<ProductFilter>,
) -> ApiResult<Json<Value>> {
    authorize(&headers)?;
    let store = db.read().await;
    let products: Vec<&Product> = store
        .products
        .iter()
        .filter(|p| filter.country.as_deref().map_or(true, |c| p.country == c))
        .collect();
    Ok(Json(json!({ "products": products })))
}

async fn get_product(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    authorize(&headers)?;
    let store = db.read().await;
    store
        .products
        .iter()
        .find(|p| p.id == id)
        .map(|p| Json(json!({ "product": p })))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Resource not found"))
}

async fn create_product(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateProductEnvelope>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    authorize(&headers)?;
    let input = input.product;
    let name = match input.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(error(StatusCode::BAD_REQUEST, "Product name is required")),
    };
    let product = Product {
        id: new_id(),
        name,
        brand: input.brand,
        description: input.description,
        price: input.price,
        currency: input.currency,
        object: "product".to_string(),
        country: String::new(),
    };
    db.write().await.products.push(product.clone());
    Ok((StatusCode::CREATED, Json(json!({ "product": product }))))
}
