// Route handlers, one module per resource. Each handler extracts and validates
// its input, runs its queries through `crate::database`, and returns either a
// shaped JSON payload or an `ApiError`.

pub mod companies;
pub mod industries;
pub mod invoices;
pub mod root;

use crate::error::ApiError;

pub use companies::create as company_create;
pub use companies::delete as company_delete;
pub use companies::list as company_list;
pub use companies::show as company_show;
pub use companies::update as company_update;

pub use invoices::create as invoice_create;
pub use invoices::delete as invoice_delete;
pub use invoices::list as invoice_list;
pub use invoices::show as invoice_show;
pub use invoices::update as invoice_update;

pub use industries::associate as industry_associate;
pub use industries::create as industry_create;
pub use industries::list as industry_list;

/// Trimmed, non-empty text field
pub(crate) fn require_text(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
