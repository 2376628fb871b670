use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Invoice, InvoiceCompanyRow, InvoiceSummary};
use crate::services::PaymentState;

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// All invoices, ordered by id
pub async fn list(pool: &PgPool) -> Result<Vec<InvoiceSummary>, DatabaseError> {
    let invoices = sqlx::query_as::<_, InvoiceSummary>(
        "SELECT id, comp_code FROM invoices ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(invoices)
}

/// Invoice joined to its owning company
pub async fn find_with_company(pool: &PgPool, id: i32) -> Result<Option<InvoiceCompanyRow>, DatabaseError> {
    let row = sqlx::query_as::<_, InvoiceCompanyRow>(
        "SELECT i.id, i.amt, i.paid, i.add_date, i.paid_date, c.code, c.name, c.description
         FROM invoices AS i
         JOIN companies AS c ON c.code = i.comp_code
         WHERE i.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn insert(pool: &PgPool, comp_code: &str, amt: f64) -> Result<Invoice, DatabaseError> {
    let sql = format!(
        "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {}",
        INVOICE_COLUMNS
    );

    let invoice = sqlx::query_as::<_, Invoice>(&sql)
        .bind(comp_code)
        .bind(amt)
        .fetch_one(pool)
        .await?;

    Ok(invoice)
}

/// Update the amount and payment status of one invoice.
///
/// The current payment state is read with `FOR UPDATE` inside the same
/// transaction as the write, so concurrent updates of one invoice serialize.
/// `requested_paid` of `None` keeps the current status. Returns `None` when
/// the invoice does not exist.
pub async fn update_payment(
    pool: &PgPool,
    id: i32,
    amt: f64,
    requested_paid: Option<bool>,
) -> Result<Option<Invoice>, DatabaseError> {
    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, PaymentState>(
        "SELECT paid, paid_date FROM invoices WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(current) = current else {
        tx.rollback().await?;
        return Ok(None);
    };

    let next = current.transition(requested_paid.unwrap_or(current.paid));

    let sql = format!(
        "UPDATE invoices SET amt = $1, paid = $2, paid_date = $3 WHERE id = $4 RETURNING {}",
        INVOICE_COLUMNS
    );
    let invoice = sqlx::query_as::<_, Invoice>(&sql)
        .bind(amt)
        .bind(next.paid)
        .bind(next.paid_date)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(invoice))
}

/// Returns rows removed
pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
