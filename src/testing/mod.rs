use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use crate::config::{AppConfig, Environment};
use crate::database::DatabaseManager;
use crate::routes::app;
use crate::state::AppState;

/// Nothing listens on port 1, so any handler that reaches the pool fails fast.
const UNREACHABLE_DATABASE_URL: &str = "postgres://biztime@127.0.0.1:1/biztime_test";

/// Router over a lazily connected pool that never succeeds in connecting.
/// Good for exercising everything that happens before the first query.
pub fn unreachable_app() -> Router {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy(UNREACHABLE_DATABASE_URL)
        .expect("lazy pool");

    let state = AppState::new(DatabaseManager::from_pool(pool));
    app(state, &AppConfig::for_environment(Environment::Test))
}

/// Send one request through the router and decode the JSON response
pub async fn send(router: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("request");

    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}
