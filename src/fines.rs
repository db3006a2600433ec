//! Overdue fine policy and calculator.
//!
//! Fines accrue at a flat daily rate once a loan passes its due date.
//! A member's balance is always recomputed from the full history, never
//! accumulated incrementally, so it stays consistent with the records
//! no matter how many checkout/return cycles have run.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::{member::Member, record::BorrowRecord};

/// Fine charged per overdue day.
pub const FINE_PER_DAY: Decimal = dec!(0.50);

/// Fine balance above which a member may not check out new books.
pub const FINE_BLOCK_THRESHOLD: Decimal = dec!(10.00);

/// Fine contribution of a single record as of `as_of`.
///
/// The effective end date is the return date for a closed record, or
/// `as_of` for one still open. Overdue days are whole days past the due
/// date, floored at zero.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn record_fine(record: &BorrowRecord, as_of: NaiveDate) -> Decimal {
    let effective_end = record.return_date().unwrap_or(as_of);
    let overdue_days = effective_end.signed_duration_since(record.due_date()).num_days().max(0);
    Decimal::from(overdue_days) * FINE_PER_DAY
}

/// Recompute `member`'s total fine across the full history (open and
/// closed records), rounded to two decimal places with round-half-up.
///
/// The result replaces the member's stored balance and is returned.
pub fn recalculate(member: &mut Member, as_of: NaiveDate) -> Decimal {
    let total: Decimal = member.history().iter().map(|record| record_fine(record, as_of)).sum();
    let total = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    member.set_fine_balance(total);
    total
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::{FINE_PER_DAY, recalculate, record_fine};
    use crate::{member::Member, record::BorrowRecord};

    /// Build a calendar date for test fixtures.
    #[allow(clippy::expect_used)]
    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn on_time_return_costs_nothing() {
        // Checked out Jan 1, due Jan 15, returned exactly on the due date.
        let mut record = BorrowRecord::start("111", day(2025, 1, 1));
        record.close(day(2025, 1, 15));
        assert_eq!(record_fine(&record, day(2025, 6, 1)), dec!(0.00));
    }

    #[test]
    fn closed_record_charges_per_late_day() {
        // Due Jan 15, returned Jan 20: five overdue days.
        let mut record = BorrowRecord::start("111", day(2025, 1, 1));
        record.close(day(2025, 1, 20));
        assert_eq!(record_fine(&record, day(2025, 6, 1)), dec!(2.50));
    }

    #[test]
    fn open_record_charges_against_as_of_date() {
        // Due Jan 15, still out on Jan 18: three overdue days.
        let record = BorrowRecord::start("111", day(2025, 1, 1));
        assert_eq!(record_fine(&record, day(2025, 1, 18)), dec!(1.50));
    }

    #[test]
    fn open_record_before_due_date_is_free() {
        let record = BorrowRecord::start("111", day(2025, 1, 1));
        assert_eq!(record_fine(&record, day(2025, 1, 10)), dec!(0.00));
    }

    #[test]
    fn recalculate_sums_open_and_closed_records() {
        let mut member = Member::new("M1", "Apurv");
        let mut late = BorrowRecord::start("111", day(2025, 1, 1));
        late.close(day(2025, 1, 20)); // 5 days late -> 2.50
        member.begin_loan(late);
        member.begin_loan(BorrowRecord::start("222", day(2025, 1, 1))); // open

        // As of Jan 18 the open loan is 3 days overdue -> 1.50.
        let total = recalculate(&mut member, day(2025, 1, 18));
        assert_eq!(total, dec!(4.00));
        assert_eq!(member.fine_balance(), dec!(4.00));
    }

    #[test]
    fn recalculate_replaces_rather_than_accumulates() {
        let mut member = Member::new("M1", "Apurv");
        let mut late = BorrowRecord::start("111", day(2025, 1, 1));
        late.close(day(2025, 1, 20));
        member.begin_loan(late);

        let first = recalculate(&mut member, day(2025, 2, 1));
        let second = recalculate(&mut member, day(2025, 6, 1));
        // A closed record's fine is fixed; repeated recalculation must
        // not compound it.
        assert_eq!(first, second);
        assert_eq!(member.fine_balance(), dec!(2.50));
    }

    #[test]
    fn daily_rate_is_fifty_cents() {
        assert_eq!(FINE_PER_DAY, dec!(0.50));
    }
}
