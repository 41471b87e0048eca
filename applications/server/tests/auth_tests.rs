/// Login and refresh over HTTP
mod common;

use axum::http::StatusCode;
use common::{error_code, fixtures, TestApp};
use serde_json::json;

#[tokio::test]
async fn login_issues_working_tokens() {
    let app = TestApp::spawn().await;
    let user = app
        .user_with_password(fixtures::TEST_USERNAME, fixtures::TEST_PASSWORD)
        .await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": fixtures::TEST_USERNAME, "password": fixtures::TEST_PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user_id"], user.id.as_str());
    assert_eq!(body["username"], fixtures::TEST_USERNAME);
    assert_eq!(body["expires_in"], 3600);

    let access_token = body["access_token"].as_str().unwrap();
    let (status, _) = app
        .post(
            "/api/playlist.create",
            Some(access_token),
            json!({ "name": "After login" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let app = TestApp::spawn().await;
    app.user_with_password(fixtures::TEST_USERNAME, fixtures::TEST_PASSWORD)
        .await;

    for (username, password) in [
        (fixtures::TEST_USERNAME, "WrongPassword"),
        ("nobody", fixtures::TEST_PASSWORD),
    ] {
        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(&body), "UNAUTHORIZED");
        assert_eq!(body["error"]["message"], "Invalid username or password");
    }
}

#[tokio::test]
async fn user_without_credentials_cannot_log_in() {
    let app = TestApp::spawn().await;
    app.user_with_token("nocreds").await;

    let (status, _) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "username": "nocreds", "password": "anything" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_issues_new_access_token() {
    let app = TestApp::spawn().await;
    let (user, _) = app.user_with_token("alice").await;
    let refresh_token = app.auth.create_refresh_token(&user.id).unwrap();

    let (status, body) = app
        .post(
            "/api/auth/refresh",
            None,
            json!({ "refresh_token": refresh_token }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let access_token = body["access_token"].as_str().unwrap();
    assert_eq!(app.auth.verify_access_token(access_token).unwrap(), user.id);
}

#[tokio::test]
async fn refresh_rejects_access_tokens() {
    let app = TestApp::spawn().await;
    let (_, access_token) = app.user_with_token("alice").await;

    let (status, body) = app
        .post(
            "/api/auth/refresh",
            None,
            json!({ "refresh_token": access_token }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHORIZED");
}

#[tokio::test]
async fn missing_header_gets_error_body() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/playlist.readByUserId?userId=x", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHORIZED");
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["shell_assets"], 2);
}
