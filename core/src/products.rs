//! The `products` resource.

use serde::Deserialize;
use url::form_urlencoded;

use crate::client::Client;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateProductArgs, ListProductsOptions, Product};

#[derive(Deserialize)]
struct ListProductsResponse {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct SingleProductResponse {
    product: Product,
}

/// Operations on `/products`.
#[derive(Debug, Clone, Copy)]
pub struct ProductsService<'a> {
    client: &'a Client,
}

impl<'a> ProductsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Catalog products, optionally narrowed by `options`.
    pub fn list(&self, options: Option<&ListProductsOptions>) -> Result<Vec<Product>, ApiError> {
        let response = self.client.execute(&self.build_list(options))?;
        self.parse_list(response)
    }

    pub fn retrieve(&self, product_id: &str) -> Result<Product, ApiError> {
        let response = self.client.execute(&self.build_retrieve(product_id))?;
        self.parse_retrieve(response)
    }

    pub fn create(&self, args: &CreateProductArgs) -> Result<Product, ApiError> {
        let request = self.build_create(args)?;
        let response = self.client.execute(&request)?;
        self.parse_create(response)
    }

    pub fn build_list(&self, options: Option<&ListProductsOptions>) -> HttpRequest {
        let mut path = "/products".to_string();
        if let Some(query) = options.and_then(encode_query) {
            path.push('?');
            path.push_str(&query);
        }
        self.client.request(HttpMethod::Get, &path, None)
    }

    pub fn build_retrieve(&self, product_id: &str) -> HttpRequest {
        let path = format!("/products/{}", product_id.trim());
        self.client.request(HttpMethod::Get, &path, None)
    }

    pub fn build_create(&self, args: &CreateProductArgs) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(args).map_err(|source| ApiError::Encode {
            operation: "product",
            source,
        })?;
        Ok(self.client.request(HttpMethod::Post, "/products", Some(body)))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        response.expect_status(&[200])?;
        let envelope: ListProductsResponse = response.decode("products list")?;
        Ok(envelope.products)
    }

    pub fn parse_retrieve(&self, response: HttpResponse) -> Result<Product, ApiError> {
        response.expect_status(&[200])?;
        let envelope: SingleProductResponse = response.decode("single product")?;
        Ok(envelope.product)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Product, ApiError> {
        response.expect_status(&[200, 201])?;
        let envelope: SingleProductResponse = response.decode("create product response")?;
        Ok(envelope.product)
    }
}

/// Query string for the non-empty filters, or `None` when nothing is set.
fn encode_query(options: &ListProductsOptions) -> Option<String> {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    if !options.country.is_empty() {
        query.append_pair("country", &options.country);
        any = true;
    }
    any.then(|| query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientArgs;
    use crate::types::CreateProduct;

    fn client() -> Client {
        Client::new(ClientArgs {
            api_key: "KEY".to_string(),
            production: false,
        })
        .with_base_url("http://localhost:3000/api/v2")
    }

    #[test]
    fn build_list_without_options_has_no_query() {
        let client = client();
        let req = client.products().build_list(None);
        assert_eq!(req.url, "http://localhost:3000/api/v2/products");
    }

    #[test]
    fn build_list_with_empty_country_has_no_query() {
        let client = client();
        let req = client.products().build_list(Some(&ListProductsOptions::default()));
        assert_eq!(req.url, "http://localhost:3000/api/v2/products");
    }

    #[test]
    fn build_list_with_country_adds_query() {
        let client = client();
        let req = client.products().build_list(Some(&ListProductsOptions::country("US")));
        assert_eq!(req.url, "http://localhost:3000/api/v2/products?country=US");
    }

    #[test]
    fn build_list_encodes_country_value() {
        let client = client();
        let req = client.products().build_list(Some(&ListProductsOptions::country("U S&")));
        assert_eq!(req.url, "http://localhost:3000/api/v2/products?country=U+S%26");
    }

    #[test]
    fn build_create_wraps_product_envelope() {
        let client = client();
        let args = CreateProductArgs {
            product: CreateProduct {
                name: "Coffee card".to_string(),
                brand: "Beans".to_string(),
                price: 25.0,
                currency: "USD".to_string(),
                ..Default::default()
            },
        };
        let req = client.products().build_create(&args).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["product"]["name"], "Coffee card");
        assert_eq!(body["product"]["price"], 25.0);
        assert!(body["product"].get("description").is_none());
    }

    #[test]
    fn build_retrieve_trims_identifier() {
        let client = client();
        let req = client.products().build_retrieve("\tPRD1 ");
        assert_eq!(req.url, "http://localhost:3000/api/v2/products/PRD1");
    }

    #[test]
    fn parse_create_unwraps_product() {
        let client = client();
        let response = HttpResponse::new(201, r#"{"product":{"id":"PRD9","name":"Coffee card"}}"#);
        let product = client.products().parse_create(response).unwrap();
        assert_eq!(product.id, "PRD9");
    }

    #[test]
    fn parse_retrieve_accepts_null_price() {
        let client = client();
        let response = HttpResponse::new(
            200,
            r#"{"product":{"id":"PRD1","name":"Coffee card","price":null,"description":null}}"#,
        );
        let product = client.products().parse_retrieve(response).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.description, "");
    }

    #[test]
    fn parse_list_wrong_status() {
        let client = client();
        let response = HttpResponse::new(401, "unauthorized");
        let err = client.products().parse_list(response).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 401, .. }));
    }
}
