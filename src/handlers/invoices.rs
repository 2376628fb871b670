use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::invoice_with_company;
use crate::database::{invoices, DatabaseError};
use crate::error::ApiError;
use crate::middleware::{ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::state::AppState;

use super::require_text;

#[derive(Debug, Deserialize)]
pub struct CreateInvoice {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoice {
    pub amt: f64,
    /// Keeps the current status when omitted
    pub paid: Option<bool>,
}

fn invoice_not_found(id: i32) -> ApiError {
    ApiError::not_found(format!("Invoice with id {} cannot be found", id))
}

fn require_amount(amt: f64) -> Result<f64, ApiError> {
    if amt.is_finite() && amt > 0.0 {
        Ok(amt)
    } else {
        Err(ApiError::bad_request("amt must be a number greater than 0"))
    }
}

/// GET /invoices - `{invoices: [{id, comp_code}, ...]}`
pub async fn list(State(state): State<AppState>) -> ApiResult<Value> {
    let invoices = invoices::list(state.db.pool()).await?;
    Ok(ApiResponse::success(json!({ "invoices": invoices })))
}

/// GET /invoices/:id - invoice with its company nested
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Value> {
    let invoice = invoices::find_with_company(state.db.pool(), id)
        .await?
        .map(invoice_with_company)
        .ok_or_else(|| invoice_not_found(id))?;

    Ok(ApiResponse::success(json!({ "invoice": invoice })))
}

/// POST /invoices - `{invoice: {id, comp_code, amt, paid, add_date, paid_date}}`
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateInvoice>,
) -> ApiResult<Value> {
    let comp_code = require_text("comp_code", &payload.comp_code)?;
    let amt = require_amount(payload.amt)?;

    let invoice = invoices::insert(state.db.pool(), &comp_code, amt)
        .await
        .map_err(|err| match err {
            DatabaseError::MissingReference(_) => {
                ApiError::bad_request(format!("Company with code {} does not exist", comp_code))
            }
            other => other.into(),
        })?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Created invoice");

    Ok(ApiResponse::success(json!({ "invoice": invoice })))
}

/// PATCH /invoices/:id - update amount and payment status
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateInvoice>,
) -> ApiResult<Value> {
    let amt = require_amount(payload.amt)?;

    let invoice = invoices::update_payment(state.db.pool(), id, amt, payload.paid)
        .await?
        .ok_or_else(|| invoice_not_found(id))?;

    Ok(ApiResponse::success(json!({ "invoice": invoice })))
}

/// DELETE /invoices/:id - `{status: "deleted"}`
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Value> {
    if invoices::delete(state.db.pool(), id).await? == 0 {
        return Err(invoice_not_found(id));
    }
    tracing::info!(id, "Deleted invoice");

    Ok(ApiResponse::success(json!({ "status": "deleted" })))
}
