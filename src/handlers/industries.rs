use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::industries_with_companies;
use crate::database::{industries, DatabaseError};
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::state::AppState;

use super::require_text;

#[derive(Debug, Deserialize)]
pub struct CreateIndustry {
    pub code: String,
    pub industry: String,
}

#[derive(Debug, Deserialize)]
pub struct AssociateCompany {
    pub comp_code: String,
}

/// GET /industries - `{industries: [{code, industry, companies: [code, ...]}, ...]}`
pub async fn list(State(state): State<AppState>) -> ApiResult<Value> {
    let rows = industries::company_rows(state.db.pool()).await?;
    let industries = industries_with_companies(&rows);

    Ok(ApiResponse::success(json!({ "industries": industries })))
}

/// POST /industries - `{industry: {code, industry}}`
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateIndustry>,
) -> ApiResult<Value> {
    let code = require_text("code", &payload.code)?;
    let name = require_text("industry", &payload.industry)?;

    let industry = industries::insert(state.db.pool(), &code, &name).await?;
    tracing::info!(code = %industry.code, "Created industry");

    Ok(ApiResponse::success(json!({ "industry": industry })))
}

/// POST /industries/:ind_code - associate a company with the industry
pub async fn associate(
    State(state): State<AppState>,
    ApiPath(ind_code): ApiPath<String>,
    ApiJson(payload): ApiJson<AssociateCompany>,
) -> ApiResult<Value> {
    let comp_code = require_text("comp_code", &payload.comp_code)?;

    let association = industries::associate(state.db.pool(), &ind_code, &comp_code)
        .await
        .map_err(|err| match err {
            DatabaseError::MissingReference(_) => ApiError::bad_request(format!(
                "Industry {} or company {} does not exist",
                ind_code, comp_code
            )),
            DatabaseError::Conflict(_) => ApiError::conflict(format!(
                "Company {} is already associated with industry {}",
                comp_code, ind_code
            )),
            other => other.into(),
        })?;

    Ok(ApiResponse::success(json!({ "companies_industries": association })))
}
