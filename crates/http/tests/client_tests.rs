//! Integration tests for the backoffice HTTP client

use backoffice_core::ApiConfig;
use backoffice_http::types::{ForgotPasswordRequest, LoginRequest, Settings};
use backoffice_http::{ApiClientBuilder, AuthenticatedApiClient, ClientError, PublicApiClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClientBuilder::new()
        .base_url("http://localhost:8080/")
        .build_public();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_returns_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "password": "hunter2hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "auth-123",
            "refresh_token": "refresh-456",
            "user": {
                "id": "u1",
                "name": "Admin",
                "email": "admin@example.com"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(&LoginRequest {
            email: "admin@example.com".into(),
            password: "hunter2hunter2".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "auth-123");
    assert_eq!(response.refresh_token.as_deref(), Some("refresh-456"));
    assert_eq!(response.user.name, "Admin");
    assert_eq!(response.user.role, None);
}

#[tokio::test]
async fn test_forgot_password_error_uses_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "No account for that email" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let err = client
        .forgot_password(&ForgotPasswordRequest {
            email: "nobody@example.com".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rejected { status: 404, .. }));
    assert_eq!(err.user_message(), "No account for that email");
}

#[tokio::test]
async fn test_authenticated_requests_carry_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/summary"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_users": 42,
            "active_users": 40,
            "sub_admins": 3
        })))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedApiClient::new(mock_server.uri(), "test-token").unwrap();
    let summary = client.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_users, 42);
    assert_eq!(summary.pending_invites, 0);
}

#[tokio::test]
async fn test_list_users_sends_pagination_and_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "25"))
        .and(query_param("search", "ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{
                "id": "u7",
                "name": "Ada",
                "email": "ada@example.com",
                "enabled": true,
                "created_at": "2024-01-02T03:04:05Z"
            }],
            "total": 26,
            "page": 2,
            "page_size": 25
        })))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedApiClient::new(mock_server.uri(), "t").unwrap();
    let users = client.list_users(2, 25, Some("ada")).await.unwrap();
    assert_eq!(users.total, 26);
    assert_eq!(users.users[0].id, "u7");
}

#[tokio::test]
async fn test_update_settings_round_trip() {
    let mock_server = MockServer::start().await;
    let settings = Settings {
        display_name: "Root".into(),
        email: "root@example.com".into(),
    };

    Mock::given(method("PUT"))
        .and(path("/api/settings"))
        .and(body_json(&settings))
        .respond_with(ResponseTemplate::new(200).set_body_json(&settings))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedApiClient::new(mock_server.uri(), "t").unwrap();
    assert_eq!(client.update_settings(&settings).await.unwrap(), settings);
}

#[tokio::test]
async fn test_unauthorized_is_auth_expired() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sub-admins"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedApiClient::new(mock_server.uri(), "stale").unwrap();
    let err = client.list_sub_admins().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert!(err.is_auth_expired());
}

#[tokio::test]
async fn test_server_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedApiClient::new(mock_server.uri(), "t").unwrap();
    let err = client.get_settings().await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError { status: 503, .. }));
    assert!(!err.is_auth_expired());
}

#[tokio::test]
async fn test_config_timeout_is_applied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "display_name": "x", "email": "x@y.z" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let mut config = ApiConfig::new(mock_server.uri());
    config.timeout_ms = 50;

    let client = ApiClientBuilder::from_config(&config)
        .build_authenticated("t")
        .unwrap();
    let err = client.get_settings().await.unwrap_err();
    match err {
        ClientError::Request(ref e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedApiClient::new(mock_server.uri(), "t").unwrap();
    let err = client.get_settings().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(!err.is_auth_expired());
    assert_eq!(
        err.user_message(),
        "Something went wrong on our side. Please try again later."
    );
}

#[tokio::test]
async fn test_unprocessable_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Email is malformed" })),
        )
        .mount(&mock_server)
        .await;

    let client = PublicApiClient::new(mock_server.uri()).unwrap();
    let err = client
        .forgot_password(&ForgotPasswordRequest {
            email: "nope".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected { status: 422, .. }));
    assert_eq!(err.user_message(), "Email is malformed");
}
