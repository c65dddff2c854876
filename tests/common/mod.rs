#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use easwipe::router::init_router;
use easwipe::state::AppState;
use easwipe::store::{DEMO_PASSWORD, Store};
use easwipe_auth::create_access_token;
use easwipe_config::{CorsConfig, JwtConfig, StoreConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Demo accounts seeded into every test store.
pub mod accounts {
    pub const ADMIN: &str = "admin@easwipe.com";
    pub const RESOURCE_PERSON: &str = "rp@easwipe.com";
    pub const SCHOOL: &str = "school@easwipe.com";
    pub const TEACHER: &str = "teacher@easwipe.com";
    pub const PARENT: &str = "parent@easwipe.com";
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub fn setup_test_app() -> TestApp {
    let store_config = StoreConfig {
        latency: Duration::ZERO,
        password_hash_cost: 4,
    };
    let state = AppState {
        store: Arc::new(Store::seeded(store_config).unwrap()),
        jwt_config: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 3600,
        },
        cors_config: CorsConfig::default(),
        metrics_handle: None,
    };

    TestApp {
        router: init_router(state.clone()),
        state,
    }
}

impl TestApp {
    /// A token for a seeded account, minted without going through login.
    pub async fn token_for(&self, email: &str) -> String {
        let user = self
            .state
            .store
            .read()
            .await
            .user_by_email(email)
            .cloned()
            .unwrap_or_else(|| panic!("no seeded user {}", email));
        create_access_token(&user, &self.state.jwt_config).unwrap()
    }

    pub async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/login",
                None,
                Some(serde_json::json!({ "email": email, "password": DEMO_PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed for {}: {}", email, body);
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }
}

/// The `id` fields of a JSON array, in order.
pub fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
