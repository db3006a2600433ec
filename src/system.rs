use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    book::Book,
    error::{LendingError, RuleViolation},
    events::LendingEvent,
    fines,
    member::Member,
    observers::LendingObserver,
    record::BorrowRecord,
    registry::Registry,
};

/// Maximum number of books a member may hold at once.
pub const MAX_BORROWED: usize = 3;

/// The checkout rule engine.
///
/// Owns the registry and sequences every checkout and return: resolve
/// the entities, refresh the member's fine balance, apply the rule
/// checks, then mutate book, member, and record state together. All
/// validation happens before any mutation, so a failed call leaves the
/// registry exactly as it was.
///
/// Rules enforced:
///   (1) members can borrow at most 3 books at a time
///   (2) books are due 14 days from checkout
///   (3) the overdue fine is $0.50 per day
///   (4) members with fines over $10 cannot check out new books
pub struct LendingSystem {
    /// The shared in-memory store of books and members.
    registry: Registry,
    /// Registered state change observers.
    observers: Vec<Box<dyn LendingObserver>>,
}

// Manual implementation of Debug: observers are trait objects.
impl fmt::Debug for LendingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingSystem")
            .field("registry", &self.registry)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for LendingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl LendingSystem {
    /// Create a lending system with an empty registry and no observers.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: Registry::new(), observers: Vec::new() }
    }

    /// Read access to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register an observer to be notified after each state transition.
    pub fn register_observer(&mut self, observer: Box<dyn LendingObserver>) {
        self.observers.push(observer);
    }

    /// Add a new book to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::DuplicateBook`] if the ISBN is already
    /// present and [`LendingError::InvalidIdentifier`] if it is empty.
    pub fn add_book(&mut self, book: Book) -> Result<(), LendingError> {
        let isbn = book.isbn().to_string();
        self.registry.add_book(book)?;
        self.notify(&LendingEvent::BookAdded { isbn });
        Ok(())
    }

    /// Register a new member.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::DuplicateMember`] if the ID is already
    /// taken and [`LendingError::InvalidIdentifier`] if it is empty.
    pub fn register_member(&mut self, member: Member) -> Result<(), LendingError> {
        let member_id = member.member_id().to_string();
        self.registry.register_member(member)?;
        self.notify(&LendingEvent::MemberRegistered { member_id });
        Ok(())
    }

    /// Check a book out to a member, dated `today`. Returns the due
    /// date (`today` plus 14 days).
    ///
    /// The member's fine balance is recomputed as of `today` before the
    /// rule checks run. Checks apply in a fixed order and the first
    /// failure wins: fine limit, then borrow limit, then availability.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::MemberNotFound`] or
    /// [`LendingError::BookNotFound`] when either key is unknown, and
    /// [`LendingError::RuleViolation`] when a checkout rule blocks the
    /// loan. On error no state has changed.
    pub fn checkout_book(
        &mut self,
        member_id: &str,
        isbn: &str,
        today: NaiveDate,
    ) -> Result<NaiveDate, LendingError> {
        let (member, book) = self.registry.loan_pair_mut(member_id, isbn)?;

        // Refresh the balance before enforcing the fine rule.
        let balance = fines::recalculate(member, today);
        if balance > fines::FINE_BLOCK_THRESHOLD {
            return Err(RuleViolation::FinesExceedLimit {
                member_id: member_id.to_string(),
                balance,
                limit: fines::FINE_BLOCK_THRESHOLD,
            }
            .into());
        }

        let held = member.borrowed_books().len();
        if held >= MAX_BORROWED {
            return Err(RuleViolation::MaxBooksReached {
                member_id: member_id.to_string(),
                count: held,
            }
            .into());
        }

        if !book.is_available() {
            return Err(RuleViolation::BookUnavailable { isbn: isbn.to_string() }.into());
        }

        // All checks passed: apply the whole transition.
        let record = BorrowRecord::start(isbn, today);
        let due_date = record.due_date();
        book.set_available(false);
        member.begin_loan(record);

        self.notify(&LendingEvent::CheckedOut {
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
            checkout_date: today,
            due_date,
        });
        Ok(due_date)
    }

    /// Return a previously borrowed book, dated `today`. Returns the
    /// member's fine balance recomputed after the record is closed.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::MemberNotFound`] or
    /// [`LendingError::BookNotFound`] when either key is unknown,
    /// [`LendingError::RuleViolation`] when the member has no open loan
    /// for the ISBN, and [`LendingError::BackdatedReturn`] when `today`
    /// precedes the loan's checkout date. On error no state has
    /// changed.
    pub fn return_book(
        &mut self,
        member_id: &str,
        isbn: &str,
        today: NaiveDate,
    ) -> Result<Decimal, LendingError> {
        let (member, book) = self.registry.loan_pair_mut(member_id, isbn)?;

        member.close_loan(isbn, today)?;
        book.set_available(true);

        // Captures any overdue fine now that the record is closed.
        let balance = fines::recalculate(member, today);

        self.notify(&LendingEvent::Returned {
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
            returned_on: today,
            fine_balance: balance,
        });
        Ok(balance)
    }

    /// Recompute and store a member's fine balance as of `as_of`,
    /// returning the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::MemberNotFound`] for an unknown member.
    pub fn calculate_fine(
        &mut self,
        member_id: &str,
        as_of: NaiveDate,
    ) -> Result<Decimal, LendingError> {
        let member = self.registry.member_mut(member_id)?;
        Ok(fines::recalculate(member, as_of))
    }

    /// All books currently available for checkout, in catalog order.
    #[must_use]
    pub fn available_books(&self) -> Vec<&Book> {
        self.registry.available_books()
    }

    /// A member's full borrowing history, open and closed records, in
    /// loan order.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::MemberNotFound`] for an unknown member.
    pub fn borrowing_history(&self, member_id: &str) -> Result<&[BorrowRecord], LendingError> {
        Ok(self.registry.member(member_id)?.history())
    }

    /// Notify all observers of a completed transition.
    fn notify(&self, event: &LendingEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
