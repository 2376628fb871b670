use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;

const COMPANIES: &[(&str, &str, &str)] = &[
    ("apple", "Apple Computer", "Maker of OSX."),
    ("ibm", "IBM", "Big blue."),
];

const INDUSTRIES: &[(&str, &str)] = &[("acct", "Accounting"), ("tech", "Technology")];

const ASSOCIATIONS: &[(&str, &str)] = &[("apple", "tech"), ("ibm", "tech"), ("ibm", "acct")];

/// (comp_code, amt, paid_date); paid iff a date is given
const INVOICES: &[(&str, f64, Option<(i32, u32, u32)>)] = &[
    ("apple", 100.0, None),
    ("apple", 200.0, None),
    ("apple", 300.0, Some((2018, 1, 1))),
    ("ibm", 400.0, None),
];

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SeedSummary {
    pub companies: u64,
    pub industries: u64,
    pub associations: u64,
    pub invoices: u64,
}

/// Insert the sample dataset. Rows that already exist are left alone, and
/// invoices are only added while the invoices table is empty.
pub async fn seed_sample_data(pool: &PgPool) -> Result<SeedSummary, DatabaseError> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for (code, name, description) in COMPANIES {
        summary.companies += sqlx::query(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3)
             ON CONFLICT DO NOTHING",
        )
        .bind(code)
        .bind(name)
        .bind(description)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for (code, industry) in INDUSTRIES {
        summary.industries += sqlx::query(
            "INSERT INTO industries (code, industry) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(code)
        .bind(industry)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for (comp_code, ind_code) in ASSOCIATIONS {
        summary.associations += sqlx::query(
            "INSERT INTO companies_industries (comp_code, ind_code) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(comp_code)
        .bind(ind_code)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices")
        .fetch_one(&mut *tx)
        .await?;
    if existing == 0 {
        for (comp_code, amt, paid_on) in INVOICES {
            let paid_date = paid_on.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
            summary.invoices += sqlx::query(
                "INSERT INTO invoices (comp_code, amt, paid, paid_date) VALUES ($1, $2, $3, $4)",
            )
            .bind(comp_code)
            .bind(amt)
            .bind(paid_date.is_some())
            .bind(paid_date)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
    }

    tx.commit().await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_references_are_consistent() {
        let companies: HashSet<&str> = COMPANIES.iter().map(|(code, _, _)| *code).collect();
        let industries: HashSet<&str> = INDUSTRIES.iter().map(|(code, _)| *code).collect();

        for (comp_code, ind_code) in ASSOCIATIONS {
            assert!(companies.contains(comp_code));
            assert!(industries.contains(ind_code));
        }
        for (comp_code, amt, paid_on) in INVOICES {
            assert!(companies.contains(comp_code));
            assert!(*amt > 0.0);
            if let Some((y, m, d)) = paid_on {
                assert!(NaiveDate::from_ymd_opt(*y, *m, *d).is_some());
            }
        }
    }
}
