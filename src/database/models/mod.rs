pub mod company;
pub mod industry;
pub mod invoice;

pub use company::{Company, CompanyDetailRow, CompanySummary};
pub use industry::{CompanyIndustry, Industry, IndustryCompanyRow};
pub use invoice::{Invoice, InvoiceCompanyRow, InvoiceSummary};
