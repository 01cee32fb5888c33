//! Router tests
//!
//! Drive the full Axum application, middleware included, against the
//! in-memory stores. No database or network needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use conduit_api::{create_app, AppState};
use conduit_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, RateLimitConfig,
    ServerConfig, TokenService,
};
use conduit_core::UserRepository;
use conduit_db::{InMemoryArticleRepository, InMemoryUserRepository};
use conduit_service::ServiceContext;

struct TestApp {
    router: Router,
    users: InMemoryUserRepository,
    articles: InMemoryArticleRepository,
}

fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "conduit-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            migrations_dir: "./migrations".to_string(),
        },
        jwt: JwtConfig {
            secret: "router-test-secret".to_string(),
            token_ttl_days: 60,
        },
        rate_limit: RateLimitConfig::default(),
        cors: CorsConfig::default(),
    }
}

fn test_app() -> TestApp {
    let config = test_config();
    let users = InMemoryUserRepository::new();
    let articles = InMemoryArticleRepository::new();
    let ctx = ServiceContext::new(
        Arc::new(users.clone()),
        Arc::new(articles.clone()),
        Arc::new(TokenService::new(&config.jwt.secret, config.jwt.token_ttl_days)),
    );

    TestApp {
        router: create_app(AppState::new(ctx, config)),
        users,
        articles,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn signup(&self, username: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(json_request(
            "POST",
            "/api/users",
            &json!({"user": {"username": username, "email": email, "password": password}}),
            None,
        ))
        .await
    }

    async fn token_for(&self, username: &str) -> String {
        let (status, body) = self
            .signup(username, &format!("{username}@x.com"), "pw1")
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["user"]["token"].as_str().unwrap().to_string()
    }
}

fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app();

    let (status, body) = app.send(get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = app.send(get("/health/ready", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = test_app();
    let response = app.router.clone().oneshot(get("/health", None)).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_signup_returns_public_view() {
    let app = test_app();

    let (status, body) = app.signup("alice", "alice@x.com", "pw1").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@x.com");
    assert!(body["user"]["bio"].is_null());
    assert!(body["user"]["token"].is_string());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_signup_conflict_reports_username_field() {
    let app = test_app();
    app.signup("alice", "alice@x.com", "pw1").await;

    let (status, body) = app.signup("bob", "alice@x.com", "pw2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_CONFLICT");
    assert_eq!(
        body["error"]["details"]["username"],
        "Username and email must be unique."
    );
    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn test_signup_malformed_email_writes_nothing() {
    let app = test_app();

    let (status, body) = app.signup("alice", "not-an-email", "pw1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_CONFLICT");
    assert!(body["error"]["details"]["email"].is_string());
    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn test_signup_rejects_malformed_body() {
    let app = test_app();
    let (status, body) = app
        .send(json_request("POST", "/api/users", &json!({"username": "x"}), None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_BODY");
}

#[tokio::test]
async fn test_login() {
    let app = test_app();
    app.signup("alice", "alice@x.com", "pw1").await;

    let (status, body) = app
        .send(json_request(
            "POST",
            "/api/users/login",
            &json!({"user": {"email": "alice@x.com", "password": "pw1"}}),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "alice");

    let (status, wrong) = app
        .send(json_request(
            "POST",
            "/api/users/login",
            &json!({"user": {"email": "alice@x.com", "password": "wrong"}}),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, unknown) = app
        .send(json_request(
            "POST",
            "/api/users/login",
            &json!({"user": {"email": "nobody@x.com", "password": "pw1"}}),
            None,
        ))
        .await;
    // Unknown email and wrong password look the same
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let app = test_app();

    let (status, body) = app.send(get("/api/user", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");

    let (status, _) = app.send(get("/api/user", Some("garbage"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = app.token_for("alice").await;
    let (status, body) = app.send(get("/api/user", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = test_app();
    let user = app
        .users
        .create(&conduit_core::NewUser::new("eve", "eve@x.com", "pw"), "h")
        .await
        .unwrap();
    let forged = TokenService::new("another-secret", 60).issue(&user).unwrap();

    let (status, body) = app.send(get("/api/user", Some(&forged))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_update_current_user() {
    let app = test_app();
    let token = app.token_for("alice").await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            "/api/user",
            &json!({"user": {"bio": "I write", "image": "https://img/a.png"}}),
            Some(&token),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["bio"], "I write");
    assert_eq!(body["user"]["image"], "https://img/a.png");
    assert_eq!(body["user"]["email"], "alice@x.com");
}

#[tokio::test]
async fn test_update_null_clears_profile_field() {
    let app = test_app();
    let token = app.token_for("alice").await;
    app.send(json_request(
        "PUT",
        "/api/user",
        &json!({"user": {"bio": "I write", "image": "https://img/a.png"}}),
        Some(&token),
    ))
    .await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            "/api/user",
            &json!({"user": {"bio": null}}),
            Some(&token),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["user"]["bio"].is_null());
    assert_eq!(body["user"]["image"], "https://img/a.png");
}

#[tokio::test]
async fn test_update_rejects_invalid_email() {
    let app = test_app();
    let token = app.token_for("alice").await;

    let (status, body) = app
        .send(json_request(
            "PUT",
            "/api/user",
            &json!({"user": {"email": "nope"}}),
            Some(&token),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_users() {
    let app = test_app();
    let token = app.token_for("alice").await;
    app.token_for("bob").await;

    let (status, body) = app.send(get("/api/users", Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["users"][0]["username"], "alice");
    assert!(body["users"][0].get("token").is_none());
}

#[tokio::test]
async fn test_delete_by_email_is_idempotent() {
    let app = test_app();
    let token = app.token_for("alice").await;
    app.token_for("bob").await;

    let request = |email: &str| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/users/{email}"))
            .header(header::AUTHORIZATION, format!("Token {token}"))
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = app.send(request("bob@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": 1}));

    let (status, body) = app.send(request("bob@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": 0}));
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_user_stats() {
    let app = test_app();
    app.token_for("alice").await;
    let alice = app.users.find_by_email("alice@x.com").await.unwrap().unwrap();
    let first = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    app.articles.publish(alice.id, "Hello", 4, first).await;
    app.articles
        .publish(alice.id, "Again", 6, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        .await;

    let (status, body) = app
        .send(get(&format!("/api/users/{}/stats", alice.id), None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "username": "alice",
            "articleCount": 2,
            "favoriteCount": 10,
            "firstArticleDate": "2024-01-02T03:04:05.000Z"
        })
    );
}

#[tokio::test]
async fn test_user_stats_unknown_and_invalid_id() {
    let app = test_app();

    let (status, body) = app.send(get("/api/users/999/stats", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = app.send(get("/api/users/abc/stats", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_roster_ranking() {
    let app = test_app();
    for name in ["ann", "ben", "cat"] {
        app.token_for(name).await;
    }
    let all = app.users.find_all().await.unwrap();
    let day = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    app.articles.publish(all[0].id, "a", 5, day).await;
    app.articles.publish(all[1].id, "b", 20, day).await;
    app.articles.publish(all[2].id, "c", 5, day).await;

    let (status, body) = app.send(get("/api/user/roster", None)).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["ben", "ann", "cat"]);
    assert_eq!(body[0]["profileLink"], "/profiles/ben");
    assert_eq!(body[0]["favoriteCount"], 20);
    assert_eq!(body[0]["firstArticleDate"], "2024-03-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_roster_user_without_content() {
    let app = test_app();
    app.token_for("lurker").await;

    let (_, body) = app.send(get("/api/user/roster", None)).await;

    assert_eq!(
        body,
        json!([{
            "username": "lurker",
            "profileLink": "/profiles/lurker",
            "articleCount": 0,
            "favoriteCount": 0,
            "firstArticleDate": ""
        }])
    );
}
