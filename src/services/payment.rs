use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Current payment columns of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PaymentState {
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
}

impl PaymentState {
    /// State after applying a requested `paid` value, stamped with today's UTC date
    pub fn transition(self, requested_paid: bool) -> PaymentState {
        self.transition_with(requested_paid, || Utc::now().date_naive())
    }

    pub fn transition_with<F>(self, requested_paid: bool, today: F) -> PaymentState
    where
        F: FnOnce() -> NaiveDate,
    {
        PaymentState {
            paid: requested_paid,
            paid_date: resolve_paid_date(self.paid, self.paid_date, requested_paid, today),
        }
    }
}

/// Compute the new `paid_date` for an invoice.
///
/// - unpaid → paid: the transition date, from `today`
/// - paid → unpaid: cleared
/// - no change in status: the current date is kept
///
/// `today` is only called for the unpaid → paid transition.
pub fn resolve_paid_date<F>(
    current_paid: bool,
    current_paid_date: Option<NaiveDate>,
    requested_paid: bool,
    today: F,
) -> Option<NaiveDate>
where
    F: FnOnce() -> NaiveDate,
{
    match (current_paid, requested_paid) {
        (false, true) => Some(today()),
        (true, false) => None,
        _ => current_paid_date,
    }
}
