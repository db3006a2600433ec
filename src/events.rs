use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A state transition that already happened in the lending system.
///
/// Events are handed to registered observers after each successful
/// operation; failed operations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum LendingEvent {
    /// A book was added to the catalog.
    BookAdded {
        /// ISBN of the new book.
        isbn: String,
    },
    /// A member was registered.
    MemberRegistered {
        /// ID of the new member.
        member_id: String,
    },
    /// A book was checked out to a member.
    CheckedOut {
        /// Borrowing member.
        member_id: String,
        /// Borrowed book.
        isbn: String,
        /// Date of the checkout.
        checkout_date: NaiveDate,
        /// Date the book is due back.
        due_date: NaiveDate,
    },
    /// A book was returned by a member.
    Returned {
        /// Returning member.
        member_id: String,
        /// Returned book.
        isbn: String,
        /// Date of the return.
        returned_on: NaiveDate,
        /// Member's fine balance after the return was processed.
        fine_balance: Decimal,
    },
}
