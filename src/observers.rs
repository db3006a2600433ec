use rust_decimal::Decimal;

use crate::events::LendingEvent;

/// Trait for observing lending state transitions.
///
/// Observers are notified after each successful operation, never
/// during one, so business logic stays free of instrumentation.
pub trait LendingObserver {
    /// Called once per completed state transition.
    fn on_event(&self, event: &LendingEvent);
}

/// Logs every transition through `tracing`.
#[derive(Debug)]
pub struct TransitionLogger;

impl LendingObserver for TransitionLogger {
    fn on_event(&self, event: &LendingEvent) {
        match event {
            LendingEvent::BookAdded { isbn } => {
                tracing::info!(isbn = %isbn, "book added");
            }
            LendingEvent::MemberRegistered { member_id } => {
                tracing::info!(member_id = %member_id, "member registered");
            }
            LendingEvent::CheckedOut { member_id, isbn, checkout_date, due_date } => {
                tracing::info!(
                    member_id = %member_id,
                    isbn = %isbn,
                    checkout_date = %checkout_date,
                    due_date = %due_date,
                    "book checked out"
                );
            }
            LendingEvent::Returned { member_id, isbn, returned_on, fine_balance } => {
                tracing::info!(
                    member_id = %member_id,
                    isbn = %isbn,
                    returned_on = %returned_on,
                    fine_balance = %fine_balance,
                    "book returned"
                );
            }
        }
    }
}

/// Warns when a return leaves the member owing a fine.
#[derive(Debug)]
pub struct FineNotifier;

impl LendingObserver for FineNotifier {
    fn on_event(&self, event: &LendingEvent) {
        if let LendingEvent::Returned { member_id, isbn, fine_balance, .. } = event
            && *fine_balance > Decimal::ZERO
        {
            tracing::warn!(
                member_id = %member_id,
                isbn = %isbn,
                fine_balance = %fine_balance,
                "overdue return left an outstanding fine"
            );
        }
    }
}
