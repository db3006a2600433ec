//! Library checkout rule engine.
//!
//! This crate provides the entity model and business rules governing
//! book and member state, checkout and return transitions, and overdue
//! fine accrual. All dates are passed in explicitly and all money is
//! fixed-point, so the engine is deterministic and testable.

pub mod book;
pub mod error;
pub mod events;
pub mod fines;
pub mod member;
pub mod observers;
pub mod record;
pub mod registry;
pub mod system;

pub use book::Book;
pub use error::{LendingError, RuleViolation};
pub use events::LendingEvent;
pub use member::Member;
pub use observers::{FineNotifier, LendingObserver, TransitionLogger};
pub use record::BorrowRecord;
pub use registry::Registry;
pub use system::LendingSystem;
