use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of days a member may keep a book before it is due.
pub const LOAN_PERIOD_DAYS: u64 = 14;

/// One loan instance: tracks a single borrow lifecycle from checkout
/// to return.
///
/// A record is *open* while the return date is unset and *closed* once
/// it is set. Records are owned exclusively by their member's history
/// and are used for due date calculation, overdue fine calculation, and
/// borrowing history reporting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BorrowRecord {
    /// ISBN of the borrowed book.
    isbn: String,
    /// Date the book was checked out.
    checkout_date: NaiveDate,
    /// Due date, always exactly [`LOAN_PERIOD_DAYS`] after checkout.
    due_date: NaiveDate,
    /// Date the book was returned, if it has been.
    return_date: Option<NaiveDate>,
}

impl BorrowRecord {
    /// Open a new record for a checkout happening on `checkout_date`.
    pub(crate) fn start(isbn: &str, checkout_date: NaiveDate) -> Self {
        // Saturation is unreachable for calendar dates; it only guards
        // inputs at the very edge of NaiveDate's representable range.
        let due_date = checkout_date
            .checked_add_days(Days::new(LOAN_PERIOD_DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self { isbn: isbn.to_string(), checkout_date, due_date, return_date: None }
    }

    /// ISBN of the borrowed book.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Date the book was checked out.
    #[must_use]
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Date the book is (or was) due back.
    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Date the book was returned, if it has been.
    #[must_use]
    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    /// Returns true if the book has not yet been returned.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    /// Close the record. Crate-internal: only the return transition may
    /// set the return date.
    pub(crate) fn close(&mut self, returned_on: NaiveDate) {
        self.return_date = Some(returned_on);
    }
}
