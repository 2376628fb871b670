pub mod payment;

pub use payment::{resolve_paid_date, PaymentState};
