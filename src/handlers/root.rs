use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - service information
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Biztime API",
        "version": version,
        "endpoints": {
            "companies": "/companies[/:code]",
            "invoices": "/invoices[/:id]",
            "industries": "/industries[/:ind_code]",
            "health": "/health",
        }
    }))
}

/// GET /health - database connectivity check
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}

/// Fallback for unrouted paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
