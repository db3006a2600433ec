use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    error::{LendingError, RuleViolation},
    record::BorrowRecord,
};

/// A registered library member.
///
/// The member owns its full borrowing history. The history is private:
/// only the lending system and the fine calculator may append to or
/// close records in it, and external callers receive a read-only view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Unique member identifier.
    member_id: String,
    /// Member name.
    name: String,
    /// ISBNs of currently borrowed books, in checkout order.
    borrowed_books: Vec<String>,
    /// Accumulated unpaid fines, recomputed from the full history.
    fine_balance: Decimal,
    /// Full borrowing history, open and closed records, in loan order.
    history: Vec<BorrowRecord>,
}

impl Member {
    /// Create a new member with no loans and no fines.
    #[must_use]
    pub fn new(member_id: &str, name: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_books: Vec::new(),
            fine_balance: Decimal::ZERO,
            history: Vec::new(),
        }
    }

    /// The member's unique identifier.
    #[must_use]
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// The member's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISBNs of the books the member currently holds.
    #[must_use]
    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_books
    }

    /// The member's current fine balance.
    #[must_use]
    pub fn fine_balance(&self) -> Decimal {
        self.fine_balance
    }

    /// Read-only view of the member's full borrowing history.
    #[must_use]
    pub fn history(&self) -> &[BorrowRecord] {
        &self.history
    }

    /// Number of loans that have not yet been returned.
    #[must_use]
    pub fn open_loans(&self) -> usize {
        self.history.iter().filter(|record| record.is_open()).count()
    }

    /// Record a new loan: appends the record to the history and the
    /// ISBN to the borrowed list. The caller has already validated the
    /// checkout rules.
    pub(crate) fn begin_loan(&mut self, record: BorrowRecord) {
        self.borrowed_books.push(record.isbn().to_string());
        self.history.push(record);
    }

    /// Close the open loan for `isbn`, dating it `returned_on`.
    ///
    /// Fails with [`RuleViolation::NotBorrowed`] when the member holds
    /// no open loan for the ISBN and [`LendingError::BackdatedReturn`]
    /// when the return date precedes the loan's checkout date. Nothing
    /// is mutated on failure.
    pub(crate) fn close_loan(
        &mut self,
        isbn: &str,
        returned_on: NaiveDate,
    ) -> Result<(), LendingError> {
        // Newest open record wins, mirroring how loans stack over time.
        let Some(record) =
            self.history.iter_mut().rev().find(|record| record.isbn() == isbn && record.is_open())
        else {
            return Err(RuleViolation::NotBorrowed {
                member_id: self.member_id.clone(),
                isbn: isbn.to_string(),
            }
            .into());
        };

        if returned_on < record.checkout_date() {
            return Err(LendingError::BackdatedReturn {
                isbn: isbn.to_string(),
                checkout_date: record.checkout_date(),
                return_date: returned_on,
            });
        }

        record.close(returned_on);
        self.borrowed_books.retain(|borrowed| borrowed != isbn);
        Ok(())
    }

    /// Overwrite the stored fine balance. Crate-internal: only the fine
    /// calculator writes this field.
    pub(crate) fn set_fine_balance(&mut self, balance: Decimal) {
        self.fine_balance = balance;
    }
}
