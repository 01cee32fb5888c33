//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer, request: &RegisterRequest) -> UserView {
    let response = server
        .post("/api/users", &UserEnvelope::new(request))
        .await
        .unwrap();
    let body: UserEnvelope<UserView> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.user
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let user = register(&server, &request).await;

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    assert!(user.bio.is_none());
    assert!(user.image.is_none());
    assert!(user.token.is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    register(&server, &request).await;

    let mut second = RegisterRequest::unique();
    second.email = request.email.clone();
    let response = server
        .post("/api/users", &UserEnvelope::new(&second))
        .await
        .unwrap();

    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_CONFLICT");
    let details = error.error.details.expect("details present");
    assert_eq!(details["username"], "Username and email must be unique.");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    register(&server, &request).await;

    let response = server
        .post(
            "/api/users/login",
            &UserEnvelope::new(LoginRequest::from_register(&request)),
        )
        .await
        .unwrap();
    let body: UserEnvelope<UserView> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user.username, request.username);
    assert!(body.user.token.is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    register(&server, &request).await;

    let login = LoginRequest {
        email: request.email.clone(),
        password: "WrongPassword!".to_string(),
    };
    let response = server
        .post("/api/users/login", &UserEnvelope::new(login))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let token = register(&server, &request).await.token.unwrap();

    let response = server.get_auth("/api/user", &token).await.unwrap();
    let body: UserEnvelope<UserView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.user.email, request.email);

    let response = server.get("/api/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let token = register(&server, &request).await.token.unwrap();

    let changes = UpdateUserRequest {
        bio: Some("Integration bio".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth("/api/user", &token, &UserEnvelope::new(changes))
        .await
        .unwrap();
    let body: UserEnvelope<UserView> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user.bio.as_deref(), Some("Integration bio"));
    assert_eq!(body.user.username, request.username);
}

#[tokio::test]
async fn test_update_into_taken_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = RegisterRequest::unique();
    register(&server, &first).await;
    let second = RegisterRequest::unique();
    let token = register(&server, &second).await.token.unwrap();

    let changes = UpdateUserRequest {
        email: Some(first.email.clone()),
        ..Default::default()
    };
    let response = server
        .put_auth("/api/user", &token, &UserEnvelope::new(changes))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_CONFLICT");
}

#[tokio::test]
async fn test_list_users_contains_new_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let token = register(&server, &request).await.token.unwrap();

    let response = server.get_auth("/api/users", &token).await.unwrap();
    let body: UsersResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.count, body.users.len());
    assert!(body.users.iter().any(|u| u.username == request.username));
    assert!(body.users.iter().all(|u| u.token.is_none()));
}

#[tokio::test]
async fn test_delete_by_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let actor = RegisterRequest::unique();
    let token = register(&server, &actor).await.token.unwrap();
    let victim = RegisterRequest::unique();
    register(&server, &victim).await;

    let path = format!("/api/users/{}", victim.email);
    let response = server.delete_auth(&path, &token).await.unwrap();
    let body: DeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.deleted, 1);

    let response = server.delete_auth(&path, &token).await.unwrap();
    let body: DeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.deleted, 0);
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_roster_lists_author_without_articles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    register(&server, &request).await;

    let response = server.get("/api/user/roster").await.unwrap();
    let roster: Vec<RosterEntry> = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = roster
        .iter()
        .find(|e| e.username == request.username)
        .expect("new account is ranked");
    assert_eq!(entry.profile_link, format!("/profiles/{}", request.username));
    assert_eq!(entry.article_count, 0);
    assert_eq!(entry.favorite_count, 0);
    assert_eq!(entry.first_article_date, "");

    let favorites: Vec<i64> = roster.iter().map(|e| e.favorite_count).collect();
    assert!(favorites.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_stats_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get(&format!("/api/users/{}/stats", i64::MAX)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");
}
