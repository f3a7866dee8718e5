//! The `orders` resource.

use serde::Deserialize;

use crate::client::Client;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Order, OrderArgs};

#[derive(Deserialize)]
struct ListOrdersResponse {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct SingleOrderResponse {
    order: Order,
}

/// Operations on `/orders`.
#[derive(Debug, Clone, Copy)]
pub struct OrdersService<'a> {
    client: &'a Client,
}

impl<'a> OrdersService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Orders from the first page the server returns.
    pub fn list(&self) -> Result<Vec<Order>, ApiError> {
        let response = self.client.execute(&self.build_list())?;
        self.parse_list(response)
    }

    pub fn retrieve(&self, order_id: &str) -> Result<Order, ApiError> {
        let response = self.client.execute(&self.build_retrieve(order_id))?;
        self.parse_retrieve(response)
    }

    /// Submit a new order.
    ///
    /// Fails with `ApiError::Validation` without touching the network when
    /// `args.payment.funding_source_id` is empty.
    pub fn create(&self, args: &OrderArgs) -> Result<Order, ApiError> {
        let request = self.build_create(args)?;
        let response = self.client.execute(&request)?;
        self.parse_create(response)
    }

    pub fn build_list(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, "/orders", None)
    }

    pub fn build_retrieve(&self, order_id: &str) -> HttpRequest {
        let path = format!("/orders/{}", order_id.trim());
        self.client.request(HttpMethod::Get, &path, None)
    }

    pub fn build_create(&self, args: &OrderArgs) -> Result<HttpRequest, ApiError> {
        if args.payment.funding_source_id.is_empty() {
            return Err(ApiError::Validation(
                "the 'payment.funding_source_id' field is required but was empty".to_string(),
            ));
        }
        let body = serde_json::to_string(args).map_err(|source| ApiError::Encode {
            operation: "order",
            source,
        })?;
        tracing::debug!(body = %body, "order request body");
        Ok(self.client.request(HttpMethod::Post, "/orders", Some(body)))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Order>, ApiError> {
        response.expect_status(&[200])?;
        let envelope: ListOrdersResponse = response.decode("orders list")?;
        Ok(envelope.orders)
    }

    pub fn parse_retrieve(&self, response: HttpResponse) -> Result<Order, ApiError> {
        response.expect_status(&[200])?;
        let envelope: SingleOrderResponse = response.decode("single order")?;
        Ok(envelope.order)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Order, ApiError> {
        response.expect_status(&[200, 201])?;
        let envelope: SingleOrderResponse = response.decode("create order response")?;
        Ok(envelope.order)
    }
}
