use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{CompanyIndustry, Industry, IndustryCompanyRow};

/// Every industry left-joined to its company associations
pub async fn company_rows(pool: &PgPool) -> Result<Vec<IndustryCompanyRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, IndustryCompanyRow>(
        "SELECT ind.code, ind.industry, ci.comp_code
         FROM industries AS ind
         LEFT JOIN companies_industries AS ci ON ci.ind_code = ind.code
         ORDER BY ind.code, ci.comp_code",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn insert(pool: &PgPool, code: &str, industry: &str) -> Result<Industry, DatabaseError> {
    let industry = sqlx::query_as::<_, Industry>(
        "INSERT INTO industries (code, industry)
         VALUES ($1, $2)
         RETURNING code, industry",
    )
    .bind(code)
    .bind(industry)
    .fetch_one(pool)
    .await?;

    Ok(industry)
}

/// Associate a company with an industry
pub async fn associate(pool: &PgPool, ind_code: &str, comp_code: &str) -> Result<CompanyIndustry, DatabaseError> {
    let association = sqlx::query_as::<_, CompanyIndustry>(
        "INSERT INTO companies_industries (ind_code, comp_code)
         VALUES ($1, $2)
         RETURNING ind_code, comp_code",
    )
    .bind(ind_code)
    .bind(comp_code)
    .fetch_one(pool)
    .await?;

    Ok(association)
}
