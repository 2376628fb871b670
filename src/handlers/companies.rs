use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::company_with_relations;
use crate::database::companies;
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::state::AppState;
use crate::util::slugify;

use super::require_text;

#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    /// Derived from `name` when absent or blank
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    pub description: Option<String>,
}

fn company_not_found(code: &str) -> ApiError {
    ApiError::not_found(format!("Company with code {} cannot be found", code))
}

/// GET /companies - `{companies: [{code, name}, ...]}`
pub async fn list(State(state): State<AppState>) -> ApiResult<Value> {
    let companies = companies::list(state.db.pool()).await?;
    Ok(ApiResponse::success(json!({ "companies": companies })))
}

/// GET /companies/:code - company with its invoice ids and industry codes
pub async fn show(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> ApiResult<Value> {
    let rows = companies::detail_rows(state.db.pool(), &code).await?;
    let company = company_with_relations(&rows).ok_or_else(|| company_not_found(&code))?;

    Ok(ApiResponse::success(json!({ "company": company })))
}

/// POST /companies - 201 `{company: {code, name, description}}`
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCompany>,
) -> ApiResult<Value> {
    let name = require_text("name", &payload.name)?;

    let code = match payload.code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => slugify(&name),
    };
    if code.is_empty() {
        return Err(ApiError::bad_request(format!(
            "Cannot derive a company code from name '{}'",
            name
        )));
    }

    let company =
        companies::insert(state.db.pool(), &code, &name, payload.description.as_deref()).await?;
    tracing::info!(code = %company.code, "Created company");

    Ok(ApiResponse::created(json!({ "company": company })))
}

/// PATCH /companies/:code - update name and description; the code never changes
pub async fn update(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateCompany>,
) -> ApiResult<Value> {
    let name = require_text("name", &payload.name)?;

    let company = companies::update(state.db.pool(), &code, &name, payload.description.as_deref())
        .await?
        .ok_or_else(|| company_not_found(&code))?;

    Ok(ApiResponse::success(json!({ "company": company })))
}

/// DELETE /companies/:code - `{status: "deleted"}`
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> ApiResult<Value> {
    if companies::delete(state.db.pool(), &code).await? == 0 {
        return Err(company_not_found(&code));
    }
    tracing::info!(code = %code, "Deleted company");

    Ok(ApiResponse::success(json!({ "status": "deleted" })))
}
