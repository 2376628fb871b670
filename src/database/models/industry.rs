use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// An industry left-joined to `companies_industries`; `comp_code` is NULL
/// for industries without associations.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct IndustryCompanyRow {
    pub code: String,
    pub industry: String,
    pub comp_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CompanyIndustry {
    pub ind_code: String,
    pub comp_code: String,
}
