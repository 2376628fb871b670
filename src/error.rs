// HTTP API Error Types
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::database::DatabaseError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body: `{error: {message, status}}`
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "message": self.message(),
                "status": self.status_code().as_u16()
            }
        })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Conflict(constraint) => {
                ApiError::conflict(format!("Record already exists ({})", constraint))
            }
            DatabaseError::MissingReference(constraint) => {
                ApiError::bad_request(format!("Referenced record does not exist ({})", constraint))
            }
            DatabaseError::InvalidValue(constraint) => {
                ApiError::bad_request(format!("Value rejected by constraint {}", constraint))
            }
            DatabaseError::Sqlx(sqlx::Error::PoolTimedOut) => {
                tracing::error!("Database pool timed out");
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("Database error occurred")
            }
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_mirrors_status() {
        let err = ApiError::not_found("Company with code nope cannot be found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_json(),
            json!({"error": {"message": "Company with code nope cannot be found", "status": 404}})
        );
    }

    #[test]
    fn database_conflicts_and_references_map_to_client_errors() {
        let conflict: ApiError = DatabaseError::Conflict("companies_pkey".into()).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert!(conflict.message().contains("companies_pkey"));

        let missing: ApiError = DatabaseError::MissingReference("invoices_comp_code_fkey".into()).into();
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

        let check: ApiError = DatabaseError::InvalidValue("invoices_amt_check".into()).into();
        assert_eq!(check.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err: ApiError = DatabaseError::Sqlx(sqlx::Error::Protocol("secret detail".into())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("secret"));
        assert_eq!(err.to_json()["error"]["status"], 500);
    }

    #[test]
    fn pool_timeout_is_unavailable() {
        let err: ApiError = DatabaseError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
