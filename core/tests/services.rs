//! Service operations run through a recording stub transport.
//!
//! The stub answers every request with one canned response and keeps the
//! requests it saw, so tests can check both the decoded result and exactly
//! what would have gone over the wire.

use std::sync::{Arc, Mutex};

use tremendous::{
    ApiError, Campaign, Client, ClientArgs, HttpMethod, HttpRequest, HttpResponse,
    ListProductsOptions, Nullable, OrderArgs, OrderDelivery, OrderDenomination, OrderPaymentArg,
    OrderRecipient, RewardArg, Transport, TESTFLIGHT_URL,
};

#[derive(Clone)]
struct StubTransport {
    response: HttpResponse,
    seen: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse::new(status, body),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

struct FailingTransport;

impl Transport for FailingTransport {
    fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport(ureq::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))))
    }
}

fn client_with(stub: &StubTransport) -> Client {
    Client::with_transport(
        ClientArgs {
            api_key: "SECRET".to_string(),
            production: false,
        },
        stub.clone(),
    )
}

fn order_args(funding_source_id: &str) -> OrderArgs {
    OrderArgs {
        campaign_id: Nullable::Null,
        external_id: Nullable::Null,
        payment: OrderPaymentArg {
            funding_source_id: funding_source_id.to_string(),
        },
        reward: RewardArg {
            campaign_id: Nullable::Value("CAMP1".to_string()),
            delivery: OrderDelivery {
                method: "EMAIL".to_string(),
                ..Default::default()
            },
            products: Some(vec!["PRD1".to_string()]),
            recipient: OrderRecipient {
                email: "testy@example.com".to_string(),
                name: "Testy McTesterson".to_string(),
            },
            value: OrderDenomination {
                denomination: 5.0,
                currency_code: "USD".to_string(),
            },
        },
    }
}

#[test]
fn campaigns_list_returns_server_records() {
    let stub = StubTransport::new(
        200,
        r#"{"campaigns":[{"id":"C1","name":"Summer","status":"active"}]}"#,
    );
    let campaigns = client_with(&stub).campaigns().list().unwrap();

    assert_eq!(
        campaigns,
        vec![Campaign {
            id: "C1".to_string(),
            name: "Summer".to_string(),
            description: String::new(),
            status: "active".to_string(),
        }]
    );
    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, format!("{TESTFLIGHT_URL}/campaigns"));
}

#[test]
fn every_request_carries_standard_headers() {
    let stub = StubTransport::new(200, r#"{"products":[]}"#);
    client_with(&stub).products().list(None).unwrap();

    let request = &stub.requests()[0];
    assert_eq!(request.headers.len(), 4);
    assert_eq!(request.header("Authorization"), Some("Bearer SECRET"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert!(request.header("User-Agent").is_some());
}

#[test]
fn orders_retrieve_server_error_carries_status_and_body() {
    let stub = StubTransport::new(500, "internal error");
    let err = client_with(&stub).orders().retrieve("X").unwrap_err();

    let text = err.to_string();
    assert!(text.contains("500"), "{text}");
    assert!(text.contains("internal error"), "{text}");
    assert_eq!(stub.requests()[0].url, format!("{TESTFLIGHT_URL}/orders/X"));
}

#[test]
fn malformed_success_body_is_decode_error() {
    let stub = StubTransport::new(200, "{ not json");
    let err = client_with(&stub).campaigns().retrieve("C1").unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.status(), None);
}

#[test]
fn create_order_without_funding_source_never_sends() {
    let stub = StubTransport::new(201, r#"{"order":{"id":"ORD1"}}"#);
    let err = client_with(&stub).orders().create(&order_args("")).unwrap_err();

    assert!(err.is_validation());
    assert!(stub.requests().is_empty());
}

#[test]
fn create_order_posts_body() {
    let stub = StubTransport::new(
        201,
        r#"{"order":{"id":"ORD1","status":"EXECUTED","rewards":[{"id":"R1","order_id":"ORD1"}]}}"#,
    );
    let order = client_with(&stub).orders().create(&order_args("BALANCE")).unwrap();
    assert_eq!(order.id, "ORD1");
    assert_eq!(order.rewards[0].order_id, "ORD1");

    let request = &stub.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert!(body["campaign_id"].is_null());
    assert!(body["external_id"].is_null());
    assert_eq!(body["reward"]["campaign_id"], "CAMP1");
    assert_eq!(body["reward"]["products"][0], "PRD1");
    assert_eq!(body["reward"]["value"]["denomination"], 5.0);
    assert_eq!(body["reward"]["delivery"]["status"], "");
    assert_eq!(body["reward"]["delivery"]["link"], "");
}

#[test]
fn products_list_query_string() {
    let cases: [(Option<ListProductsOptions>, &str); 3] = [
        (None, "/products"),
        (Some(ListProductsOptions::default()), "/products"),
        (Some(ListProductsOptions::country("US")), "/products?country=US"),
    ];
    for (options, path) in cases {
        let stub = StubTransport::new(200, r#"{"products":[]}"#);
        client_with(&stub).products().list(options.as_ref()).unwrap();
        assert_eq!(stub.requests()[0].url, format!("{TESTFLIGHT_URL}{path}"));
    }
}

#[test]
fn retrieve_twice_yields_equal_values() {
    let stub = StubTransport::new(
        200,
        r#"{"product":{"id":"PRD1","name":"Coffee card","price":25.0,"currency":"USD"}}"#,
    );
    let client = client_with(&stub);
    let first = client.products().retrieve("PRD1").unwrap();
    let second = client.products().retrieve("PRD1").unwrap();
    assert_eq!(first, second);
    assert_eq!(stub.requests().len(), 2);
}

#[test]
fn transport_failure_is_propagated() {
    let client = Client::with_transport(ClientArgs::default(), FailingTransport);
    let err = client.orders().list().unwrap_err();
    match &err {
        ApiError::Transport(ureq::Error::Io(io)) => {
            assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused)
        }
        other => panic!("expected an I/O transport error, got {other:?}"),
    }
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn concurrent_calls_share_one_client() {
    let stub = StubTransport::new(200, r#"{"orders":[]}"#);
    let client = client_with(&stub);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| client.orders().list().unwrap());
        }
    });
    assert_eq!(stub.requests().len(), 4);
}
