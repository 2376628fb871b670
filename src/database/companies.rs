use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Company, CompanyDetailRow, CompanySummary};

/// All companies, ordered by code
pub async fn list(pool: &PgPool) -> Result<Vec<CompanySummary>, DatabaseError> {
    let companies = sqlx::query_as::<_, CompanySummary>(
        "SELECT code, name FROM companies ORDER BY code",
    )
    .fetch_all(pool)
    .await?;

    Ok(companies)
}

/// Company left-joined to its invoices and industries. Returns no rows when
/// the company does not exist; one row per (invoice, industry) pair otherwise.
pub async fn detail_rows(pool: &PgPool, code: &str) -> Result<Vec<CompanyDetailRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, CompanyDetailRow>(
        "SELECT c.code, c.name, c.description, i.id AS invoice_id, ci.ind_code
         FROM companies AS c
         LEFT JOIN invoices AS i ON i.comp_code = c.code
         LEFT JOIN companies_industries AS ci ON ci.comp_code = c.code
         WHERE c.code = $1
         ORDER BY i.id, ci.ind_code",
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn insert(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Company, DatabaseError> {
    let company = sqlx::query_as::<_, Company>(
        "INSERT INTO companies (code, name, description)
         VALUES ($1, $2, $3)
         RETURNING code, name, description",
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(company)
}

/// Update name and description; `None` when no company has this code
pub async fn update(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<Option<Company>, DatabaseError> {
    let company = sqlx::query_as::<_, Company>(
        "UPDATE companies SET name = $1, description = $2
         WHERE code = $3
         RETURNING code, name, description",
    )
    .bind(name)
    .bind(description)
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(company)
}

/// Delete a company (invoices and associations cascade). Returns rows removed.
pub async fn delete(pool: &PgPool, code: &str) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
        .bind(code)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
