pub mod companies;
pub mod industries;
pub mod invoices;
pub mod manager;
pub mod models;
pub mod seed;

pub use manager::{DatabaseError, DatabaseManager};
