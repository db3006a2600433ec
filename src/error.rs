use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by lending operations.
///
/// Every variant is expected and recoverable by the caller; none is
/// process-fatal. Rule violations are never silently swallowed, and the
/// lending system performs no partial mutation before returning one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// Requested ISBN does not exist in the catalog.
    #[error("book not found: isbn={0}")]
    BookNotFound(String),
    /// Requested member ID is not registered.
    #[error("member not found: member_id={0}")]
    MemberNotFound(String),
    /// Tried to add a book whose ISBN is already in the catalog.
    #[error("book already exists: isbn={0}")]
    DuplicateBook(String),
    /// Tried to register a member whose ID is already taken.
    #[error("member already exists: member_id={0}")]
    DuplicateMember(String),
    /// A registration key (ISBN or member ID) was empty.
    #[error("{0} must not be empty")]
    InvalidIdentifier(&'static str),
    /// A return was dated before the loan's checkout date.
    #[error(
        "return date {return_date} precedes checkout date {checkout_date} for isbn={isbn}"
    )]
    BackdatedReturn {
        /// ISBN of the loan being returned.
        isbn: String,
        /// Date the loan was opened.
        checkout_date: NaiveDate,
        /// Offending return date.
        return_date: NaiveDate,
    },
    /// A checkout or return violated a business rule.
    #[error("checkout rule violation: {0}")]
    RuleViolation(#[from] RuleViolation),
}

/// Business-rule failures during checkout or return.
///
/// Checkout checks apply in a fixed order: fines, then the borrow
/// limit, then availability. The first applicable violation wins when
/// several could apply to one call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The member's recomputed fine balance exceeds the checkout limit.
    #[error("member {member_id} has unpaid fines ${balance} (limit ${limit})")]
    FinesExceedLimit {
        /// Member attempting the checkout.
        member_id: String,
        /// Recomputed fine balance.
        balance: Decimal,
        /// Balance above which checkouts are blocked.
        limit: Decimal,
    },
    /// The member already holds the maximum number of open loans.
    #[error("member {member_id} already has {count} books checked out")]
    MaxBooksReached {
        /// Member attempting the checkout.
        member_id: String,
        /// Number of books currently held.
        count: usize,
    },
    /// The book is checked out by someone else.
    #[error("book {isbn} is not available")]
    BookUnavailable {
        /// ISBN that was requested.
        isbn: String,
    },
    /// The member has no open loan for the ISBN being returned.
    #[error("member {member_id} does not have book {isbn} checked out")]
    NotBorrowed {
        /// Member attempting the return.
        member_id: String,
        /// ISBN that was offered back.
        isbn: String,
    },
}
