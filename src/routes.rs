use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers::{self, root};
use crate::state::AppState;

/// Build the HTTP application around an injected state
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        // Service
        .route("/", get(root::root))
        .route("/health", get(root::health))
        // Resources
        .merge(company_routes())
        .merge(invoice_routes())
        .merge(industry_routes())
        .fallback(root::not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(handlers::company_list).post(handlers::company_create),
        )
        .route(
            "/companies/:code",
            get(handlers::company_show)
                .patch(handlers::company_update)
                .delete(handlers::company_delete),
        )
}

fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invoices",
            get(handlers::invoice_list).post(handlers::invoice_create),
        )
        .route(
            "/invoices/:id",
            get(handlers::invoice_show)
                .patch(handlers::invoice_update)
                .delete(handlers::invoice_delete),
        )
}

fn industry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/industries",
            get(handlers::industry_list).post(handlers::industry_create),
        )
        .route("/industries/:ind_code", post(handlers::industry_associate))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
