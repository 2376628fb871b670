//! Reshape flat join results into the nested objects the API returns.
//!
//! Every function here is pure. Joins multiply parent rows (a company with two
//! invoices and one industry comes back as two rows), so child values are
//! collected through [`Distinct`], which keeps the first occurrence of each
//! value in the order it was seen. Empty input yields `None` or an empty
//! vector; deciding that something is missing is left to the caller.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use chrono::NaiveDate;
use serde::Serialize;

use crate::database::models::{
    Company, CompanyDetailRow, IndustryCompanyRow, InvoiceCompanyRow,
};

/// Insertion-ordered set
#[derive(Debug, Clone)]
pub struct Distinct<T> {
    seen: HashSet<T>,
    items: Vec<T>,
}

impl<T: Eq + Hash + Clone> Distinct<T> {
    pub fn new() -> Self {
        Self { seen: HashSet::new(), items: Vec::new() }
    }

    /// Returns false if the value was already present
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Default for Distinct<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for Distinct<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for Distinct<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyWithInvoices {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: CompanyWithInvoices,
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryWithCompanies {
    pub code: String,
    pub industry: String,
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

/// Company with the distinct ids of its invoices.
///
/// The company columns are taken from the first row.
pub fn company_with_invoices(rows: &[CompanyDetailRow]) -> Option<CompanyWithInvoices> {
    let first = rows.first()?;

    let invoices: Distinct<i32> = rows.iter().filter_map(|row| row.invoice_id).collect();

    Some(CompanyWithInvoices {
        company: Company {
            code: first.code.clone(),
            name: first.name.clone(),
            description: first.description.clone(),
        },
        invoices: invoices.into_vec(),
    })
}

/// Company with distinct invoice ids and distinct industry codes, undoing the
/// fan-out of the double left join.
pub fn company_with_relations(rows: &[CompanyDetailRow]) -> Option<CompanyDetail> {
    let company = company_with_invoices(rows)?;

    let industries: Distinct<String> = rows
        .iter()
        .filter_map(|row| row.ind_code.clone())
        .collect();

    Some(CompanyDetail {
        company,
        industries: industries.into_vec(),
    })
}

/// One entry per distinct industry code, in first-seen order. Industries with
/// no associated companies keep an empty `companies` list.
pub fn industries_with_companies(rows: &[IndustryCompanyRow]) -> Vec<IndustryWithCompanies> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&IndustryCompanyRow, Distinct<String>)> = Vec::new();

    for row in rows {
        let slot = *slots.entry(row.code.as_str()).or_insert_with(|| {
            groups.push((row, Distinct::new()));
            groups.len() - 1
        });
        if let Some(comp_code) = &row.comp_code {
            groups[slot].1.insert(comp_code.clone());
        }
    }

    groups
        .into_iter()
        .map(|(first, companies)| IndustryWithCompanies {
            code: first.code.clone(),
            industry: first.industry.clone(),
            companies: companies.into_vec(),
        })
        .collect()
}

/// Nest the owning company inside the invoice
pub fn invoice_with_company(row: InvoiceCompanyRow) -> InvoiceDetail {
    InvoiceDetail {
        id: row.id,
        amt: row.amt,
        paid: row.paid,
        add_date: row.add_date,
        paid_date: row.paid_date,
        company: Company {
            code: row.code,
            name: row.name,
            description: row.description,
        },
    }
}
