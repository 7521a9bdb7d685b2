// Shared test helpers for building the API against in-memory dependencies.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use forecast_api::initialization::init_client;
use forecast_api::{
    build_router, run_migrations, AppState, Config, JwtAuthenticator, ProxyClient, RandomSource,
    ThreadRandom,
};

/// Signing secret shared by test tokens and the test authenticator.
#[allow(dead_code)]
pub const TEST_JWT_SECRET: &str = "acceptance-test-secret";

/// Upstream address nothing listens on; only used by tests that never proxy.
#[allow(dead_code)]
pub const UNUSED_UPSTREAM: &str = "http://127.0.0.1:9";

/// Creates a test database pool with migrations applied.
/// Uses a single-connection in-memory database so every query sees the same data.
#[allow(dead_code)]
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Random source replaying fixed sequences; records the bounds of each draw.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedRandom {
    ranges: Mutex<VecDeque<i32>>,
    indexes: Mutex<VecDeque<i32>>,
    pub range_calls: Mutex<Vec<(i32, i32)>>,
    pub index_calls: Mutex<Vec<i32>>,
}

#[allow(dead_code)]
impl ScriptedRandom {
    pub fn new(ranges: &[i32], indexes: &[i32]) -> Self {
        Self {
            ranges: Mutex::new(ranges.iter().copied().collect()),
            indexes: Mutex::new(indexes.iter().copied().collect()),
            ..Default::default()
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&self, min: i32, max: i32) -> i32 {
        self.range_calls.lock().unwrap().push((min, max));
        self.ranges.lock().unwrap().pop_front().unwrap_or(min)
    }

    fn next_below(&self, max: i32) -> i32 {
        self.index_calls.lock().unwrap().push(max);
        self.indexes.lock().unwrap().pop_front().unwrap_or(0)
    }
}

/// Builds handler state backed by `pool`, proxying to `upstream`.
#[allow(dead_code)]
pub fn test_state(
    pool: SqlitePool,
    upstream: &str,
    random: Arc<dyn RandomSource>,
) -> AppState {
    let config = Config {
        open_weather_url: upstream.to_string(),
        open_weather_host: "some-host".to_string(),
        open_weather_key: "some-key".to_string(),
        ..Default::default()
    };
    let http = init_client(&config).expect("Failed to build HTTP client");

    AppState {
        pool,
        random,
        proxy: Arc::new(ProxyClient::new(Arc::new(http), upstream).expect("Invalid upstream")),
        authenticator: Arc::new(JwtAuthenticator::new(
            Some(TEST_JWT_SECRET),
            None,
            None,
            "name",
        )),
        indent_json: false,
    }
}

/// State with a real random source and no reachable upstream.
#[allow(dead_code)]
pub async fn default_test_state() -> AppState {
    test_state(create_test_pool().await, UNUSED_UPSTREAM, Arc::new(ThreadRandom))
}

/// Signs `claims` as an HS256 token with `secret`.
#[allow(dead_code)]
pub fn sign_token(claims: &serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Expiry one hour from now.
#[allow(dead_code)]
pub fn one_hour_from_now() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

/// Signs a token carrying `name`, valid for one hour.
#[allow(dead_code)]
pub fn token_with_name(name: &str) -> String {
    let claims = serde_json::json!({
        "name": name,
        "exp": one_hour_from_now(),
    });
    sign_token(&claims, TEST_JWT_SECRET)
}

/// Sends a GET through the router, optionally with a bearer token.
#[allow(dead_code)]
pub async fn get(state: AppState, uri: &str, bearer: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        request = request.header("authorization", format!("Bearer {}", token));
    }
    build_router(state)
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .expect("Router should not fail")
}

/// Reads a response body to a string.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
