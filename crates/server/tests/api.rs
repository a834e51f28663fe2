//! API tests driven through the router with `tower::ServiceExt::oneshot`.
//!
//! Every test builds a fresh application over a seeded in-memory store, so
//! tests are independent and need no running server or database file. The
//! event and contact routes sit behind per-IP rate limiters, so requests to
//! them carry an `x-forwarded-for` header unique to each test.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use impact_server::config::ServerConfig;
use impact_server::routes;
use impact_server::services::auth::hash_password;
use impact_server::state::AppState;
use impact_server::store::MemoryStore;

const ADMIN_PASSWORD: &str = "integration-test-password";

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        jwt_secret: SecretString::from("kQ8vJ2xR7mT4wN9bZ6cF1aE3dH5sL0pY"),
        admin_password: SecretString::from(ADMIN_PASSWORD),
        database_path: PathBuf::from("unused.db"),
        ephemeral_storage: true,
    }
}

fn test_app() -> Router {
    let config = test_config();
    let hash = hash_password(ADMIN_PASSWORD).expect("hashing succeeds");
    let store = Arc::new(MemoryStore::seeded(&hash));
    routes::app(AppState::new(config, store))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn json_request_from(method: &str, uri: &str, ip: IpAddr, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", ip.to_string())
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn login_token(app: &Router) -> String {
    let body = json!({ "username": "admin", "password": ADMIN_PASSWORD });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/admin/login", &body))
        .await
        .expect("request completes");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["token"].as_str().expect("token present").to_string()
}

fn authed(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().expect("valid header"),
    );
    request
}

#[tokio::test]
async fn health_reports_memory_adapter() {
    let app = test_app();
    let response = app.oneshot(get("/api/health")).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["adapter"], "memory");
    assert_eq!(json["db"], true);
}

#[tokio::test]
async fn ping_answers_pong() {
    let app = test_app();
    let response = app.oneshot(get("/api/ping")).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    assert_eq!(&bytes[..], b"pong");
}

#[tokio::test]
async fn profile_is_seeded() {
    let app = test_app();
    let response = app.oneshot(get("/api/profile")).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Manuel Cosovschi");
    assert_eq!(json["status"], "DISPONIBLE");
}

#[tokio::test]
async fn profile_missing_is_json_404() {
    // Unseeded store has no profile row
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let app = routes::app(AppState::new(config, store));

    let response = app.oneshot(get("/api/profile")).await.expect("completes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], 404);
    assert_eq!(json["error"]["message"], "profile not found");
}

#[tokio::test]
async fn projects_are_seeded_in_display_order() {
    let app = test_app();
    let response = app.oneshot(get("/api/projects")).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .expect("array body")
        .iter()
        .map(|p| p["title"].as_str().expect("title present"))
        .collect();
    assert_eq!(
        titles,
        [
            "FitNow App",
            "Las Cañas - Web",
            "Las Cañas - Bot",
            "Inmuebles Comerciales SRL"
        ]
    );
    // "type" on the wire, kind internally
    assert_eq!(json[0]["type"], "Tesis");
}

#[tokio::test]
async fn cv_descriptor_is_served() {
    let app = test_app();
    let response = app.oneshot(get("/api/cv")).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["url"], "/cv-placeholder.pdf");
}

#[tokio::test]
async fn login_returns_token() {
    let app = test_app();
    let token = login_token(&app).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = test_app();
    let body = json!({ "username": "admin", "password": "not-it" });
    let response = app
        .oneshot(json_request("POST", "/api/admin/login", &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_malformed_body_is_400() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");
    let response = app.oneshot(request).await.expect("completes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protected_route_without_token_is_401() {
    let app = test_app();
    let body = json!({ "status": "OCUPADO" });
    let response = app
        .oneshot(json_request("PUT", "/api/profile", &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_403() {
    let app = test_app();
    let body = json!({ "status": "OCUPADO" });
    let request = authed(json_request("PUT", "/api/profile", &body), "not.a.token");
    let response = app.oneshot(request).await.expect("completes");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn profile_update_merges_only_sent_fields() {
    let app = test_app();
    let token = login_token(&app).await;

    let body = json!({ "status": "OCUPADO" });
    let request = authed(json_request("PUT", "/api/profile", &body), &token);
    let response = app.clone().oneshot(request).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/profile")).await.expect("completes");
    let json = body_json(response).await;
    assert_eq!(json["status"], "OCUPADO");
    // Untouched field survives the partial update
    assert_eq!(json["name"], "Manuel Cosovschi");
}

#[tokio::test]
async fn project_create_requires_auth_and_returns_201() {
    let app = test_app();
    let token = login_token(&app).await;

    let body = json!({ "title": "Side Project", "type": "Demo" });
    let request = authed(json_request("POST", "/api/projects", &body), &token);
    let response = app.clone().oneshot(request).await.expect("completes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/projects")).await.expect("completes");
    let json = body_json(response).await;
    assert_eq!(json.as_array().expect("array body").len(), 5);
}

#[tokio::test]
async fn event_is_recorded_and_aggregated() {
    let app = test_app();
    let ip: IpAddr = "203.0.113.10".parse().expect("valid ip");

    let body = json!({ "eventType": "page_view", "page": "/projects" });
    let response = app
        .clone()
        .oneshot(json_request_from("POST", "/api/events", ip, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let token = login_token(&app).await;
    let request = authed(get("/api/events/stats"), &token);
    let response = app.oneshot(request).await.expect("completes");
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let stats = json.as_array().expect("array body");
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["event_type"], "page_view");
    assert_eq!(stats[0]["count"], 1);
}

#[tokio::test]
async fn event_without_page_is_400() {
    let app = test_app();
    let ip: IpAddr = "203.0.113.11".parse().expect("valid ip");

    let body = json!({ "eventType": "page_view" });
    let response = app
        .oneshot(json_request_from("POST", "/api/events", ip, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn event_stats_require_admin_token() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/events/stats"))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn contact_submission_is_accepted() {
    let app = test_app();
    let ip: IpAddr = "203.0.113.20".parse().expect("valid ip");

    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "I would like to talk about a role."
    });
    let response = app
        .oneshot(json_request_from("POST", "/api/contact", ip, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn contact_with_short_message_is_400() {
    let app = test_app();
    let ip: IpAddr = "203.0.113.21".parse().expect("valid ip");

    let body = json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" });
    let response = app
        .oneshot(json_request_from("POST", "/api/contact", ip, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], 400);
}

#[tokio::test]
async fn contact_with_invalid_email_is_400() {
    let app = test_app();
    let ip: IpAddr = "203.0.113.22".parse().expect("valid ip");

    let body = json!({
        "name": "Ada",
        "email": "not-an-email",
        "message": "I would like to talk about a role."
    });
    let response = app
        .oneshot(json_request_from("POST", "/api/contact", ip, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sixth_contact_within_the_hour_is_rate_limited() {
    let app = test_app();
    let ip: IpAddr = "203.0.113.30".parse().expect("valid ip");

    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "I would like to talk about a role."
    });

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request_from("POST", "/api/contact", ip, &body))
            .await
            .expect("completes");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(json_request_from("POST", "/api/contact", ip, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn rate_limits_are_tracked_per_ip() {
    let app = test_app();
    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "I would like to talk about a role."
    });

    let first: IpAddr = "203.0.113.40".parse().expect("valid ip");
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request_from("POST", "/api/contact", first, &body))
            .await
            .expect("completes");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // A different client is unaffected by the first one's exhausted budget
    let second: IpAddr = "203.0.113.41".parse().expect("valid ip");
    let response = app
        .oneshot(json_request_from("POST", "/api/contact", second, &body))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn unmatched_api_path_gets_json_404() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/does-not-exist"))
        .await
        .expect("completes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "API endpoint not found");
}
