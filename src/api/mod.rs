pub mod format;

pub use format::{
    company_with_invoices, company_with_relations, industries_with_companies,
    invoice_with_company, CompanyDetail, CompanyWithInvoices, Distinct, IndustryWithCompanies,
    InvoiceDetail,
};
