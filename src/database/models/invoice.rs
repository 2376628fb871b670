use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `GET /invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// An invoice joined to its owning company
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InvoiceCompanyRow {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}
