use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `GET /companies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// One row of a company left-joined to its invoices and industry associations.
/// Either join side may be NULL.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CompanyDetailRow {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoice_id: Option<i32>,
    pub ind_code: Option<String>,
}
