//! Health-check client tests against a live axum backend

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use modu_dashboard::api_client::{ApiClientError, ModuClient};
use modu_dashboard::config::ApiConfig;
use modu_dashboard::credentials::{CredentialProvider, NoCredentials, StaticToken};
use modu_dashboard::status::{HealthStatus, UNREACHABLE_MESSAGE};

/// Headers seen by the backend, one entry per request
#[derive(Clone, Default)]
struct Seen {
    authorization: Arc<Mutex<Vec<Option<String>>>>,
    content_type: Arc<Mutex<Vec<Option<String>>>>,
}

impl Seen {
    fn authorization(&self) -> Vec<Option<String>> {
        self.authorization.lock().unwrap().clone()
    }

    fn content_type(&self) -> Vec<Option<String>> {
        self.content_type.lock().unwrap().clone()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn health(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    seen.authorization
        .lock()
        .unwrap()
        .push(header_value(&headers, header::AUTHORIZATION));
    seen.content_type
        .lock()
        .unwrap()
        .push(header_value(&headers, header::CONTENT_TYPE));
    Json(json!({ "status": "ok" }))
}

/// Serve `router` on an ephemeral port and return its base URL
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn healthy_backend() -> (String, Seen) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/api/health/", get(health))
        .with_state(seen.clone());
    (spawn_backend(router).await, seen)
}

fn client(base_url: &str, credentials: impl CredentialProvider + 'static) -> ModuClient {
    ModuClient::new(ApiConfig::new(base_url), Arc::new(credentials)).unwrap()
}

#[tokio::test]
async fn test_get_health_decodes_body() {
    let (base_url, _) = healthy_backend().await;

    let body = client(&base_url, NoCredentials).get_health().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));

    let status = HealthStatus::from_result(&Ok::<_, ApiClientError>(body));
    let message = status.message();
    assert!(message.contains("API online"));
    assert!(message.contains(r#"{"status":"ok"}"#));
}

#[tokio::test]
async fn test_health_body_echoed_in_server_order() {
    let raw = r#"{"status":"ok","database":"up"}"#;
    let router = Router::new().route(
        "/api/health/",
        get(move || async move { ([(header::CONTENT_TYPE, "application/json")], raw) }),
    );
    let base_url = spawn_backend(router).await;

    let result = client(&base_url, NoCredentials).get_health().await;
    let status = HealthStatus::from_result(&result);
    assert_eq!(status.message(), format!("API online: {raw}"));
}

#[tokio::test]
async fn test_bearer_header_sent_when_token_present() {
    let (base_url, seen) = healthy_backend().await;
    let client = client(&base_url, StaticToken::new("abc123"));

    client.get_health().await.unwrap();
    client.get_health().await.unwrap();

    assert_eq!(
        seen.authorization(),
        vec![Some("Bearer abc123".to_string()); 2]
    );
}

#[tokio::test]
async fn test_no_auth_header_without_token() {
    let (base_url, seen) = healthy_backend().await;

    client(&base_url, NoCredentials).get_health().await.unwrap();

    assert_eq!(seen.authorization(), vec![None]);
}

#[tokio::test]
async fn test_json_content_type_sent() {
    let (base_url, seen) = healthy_backend().await;

    client(&base_url, NoCredentials).get_health().await.unwrap();

    assert_eq!(seen.content_type(), vec![Some("application/json".to_string())]);
}

#[tokio::test]
async fn test_token_read_on_every_request() {
    struct Rotating(Mutex<u32>);

    impl CredentialProvider for Rotating {
        fn token(&self) -> Option<String> {
            let mut n = self.0.lock().unwrap();
            *n += 1;
            (*n % 2 == 0).then(|| format!("token-{n}"))
        }
    }

    let (base_url, seen) = healthy_backend().await;
    let client = client(&base_url, Rotating(Mutex::new(0)));

    client.get_health().await.unwrap();
    client.get_health().await.unwrap();

    assert_eq!(
        seen.authorization(),
        vec![None, Some("Bearer token-2".to_string())]
    );
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(&format!("http://{addr}"), NoCredentials)
        .get_health()
        .await;
    assert!(matches!(result, Err(ApiClientError::Http(_))));

    let status = HealthStatus::from_result(&result);
    assert!(!status.is_loading());
    assert_eq!(status.message(), UNREACHABLE_MESSAGE);
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let router = Router::new().route(
        "/api/health/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "database down") }),
    );
    let base_url = spawn_backend(router).await;

    let err = client(&base_url, NoCredentials)
        .get_health()
        .await
        .unwrap_err();
    match err {
        ApiClientError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "database down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_and_not_found() {
    let router = Router::new().route(
        "/api/health/",
        get(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
    );
    let base_url = spawn_backend(router).await;
    let err = client(&base_url, StaticToken::new("stale"))
        .get_health()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::Unauthorized(msg) if msg == "bad token"));

    let base_url = spawn_backend(Router::new()).await;
    let err = client(&base_url, NoCredentials)
        .get_health()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::NotFound(_)));
}

#[tokio::test]
async fn test_non_json_body_is_deserialize_error() {
    let router = Router::new().route("/api/health/", get(|| async { "not json" }));
    let base_url = spawn_backend(router).await;

    let err = client(&base_url, NoCredentials)
        .get_health()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::Deserialize(_)));
    assert_eq!(
        HealthStatus::from_result(&Err::<Value, _>(err)),
        HealthStatus::Unreachable
    );
}
