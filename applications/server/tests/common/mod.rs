//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use delta_core::User;
use delta_music_client::{MusicServiceClient, ServiceConfig};
use delta_server::{create_router, AppState, AuthService, ShellCache};
use delta_storage::Database;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "test-secret-key-for-testing";

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "testuser";
    pub const TEST_PASSWORD: &str = "TestPassword123!";
}

/// Create a file-backed database with migrations applied
pub async fn create_test_database(dir: &TempDir) -> Arc<Database> {
    let url = format!("sqlite://{}", dir.path().join("delta.db").display());
    Arc::new(Database::open(&url).await.unwrap())
}

pub fn create_test_auth_service() -> AuthService {
    AuthService::new(TEST_SECRET, 1, 1)
}

/// Write a small web shell: pinned `index.html` and `manifest.json`, plus an
/// icon that is only reachable from disk
pub fn write_web_shell(dir: &TempDir) -> std::path::PathBuf {
    let web = dir.path().join("web");
    std::fs::create_dir_all(web.join("icons")).unwrap();
    std::fs::write(web.join("index.html"), "<html>delta shell</html>").unwrap();
    std::fs::write(web.join("manifest.json"), r#"{"name":"Delta Music"}"#).unwrap();
    std::fs::write(web.join("icons/play.svg"), "<svg/>").unwrap();
    web
}

pub fn pinned_assets() -> Vec<String> {
    vec!["/".to_string(), "/manifest.json".to_string()]
}

/// Full router over a temp database, a temp web shell and a mock music service
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    pub auth: Arc<AuthService>,
    pub music: MockServer,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = TempDir::new().unwrap();
        let db = create_test_database(&dir).await;
        let auth = Arc::new(create_test_auth_service());

        let music = MockServer::start().await;
        let client = MusicServiceClient::new(ServiceConfig::new(music.uri())).unwrap();

        let web = write_web_shell(&dir);
        let shell = Arc::new(ShellCache::install(web, &pinned_assets()).await);

        let state = AppState::new(
            Arc::clone(&db),
            Arc::clone(&auth),
            Arc::new(client),
            shell,
            15,
        );

        Self {
            router: create_router(state),
            db,
            auth,
            music,
            dir,
        }
    }

    /// Create a user without credentials and return a session token for it
    pub async fn user_with_token(&self, name: &str) -> (User, String) {
        let user = self.db.create_user(name).await.unwrap();
        let token = self.auth.create_access_token(&user.id).unwrap();
        (user, token)
    }

    /// Create a user that can log in with `password`
    pub async fn user_with_password(&self, name: &str, password: &str) -> User {
        let user = self.db.create_user(name).await.unwrap();
        let hash = self.auth.hash_password(password).unwrap();
        self.db.set_password_hash(&user.id, &hash).await.unwrap();
        user
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri).method("GET");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = self.send(builder.body(Body::empty()).unwrap()).await;
        json_response(response).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = self
            .send(builder.body(Body::from(body.to_string())).unwrap())
            .await;
        json_response(response).await
    }
}

pub async fn body_bytes(response: Response) -> bytes::Bytes {
    to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

pub async fn json_response(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body_bytes(response).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// The `error.code` field of an error body
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
