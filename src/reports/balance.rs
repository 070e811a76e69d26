//! Running fund balances
//!
//! The annual report shows a cumulative account balance per year: each
//! period's income minus expenses, added to the prior running total. The
//! balance is computed over the complete, unfiltered period set so that
//! filtering the displayed range never changes the balance of any period.

use std::collections::BTreeMap;

use crate::models::{Money, PeriodKey, RecordsMap};

use super::totals::FundTotals;

/// Compute the cumulative balance after each period, in chronological order
pub fn running_balances(buckets: &RecordsMap) -> BTreeMap<PeriodKey, Money> {
    let mut running = Money::zero();
    let mut balances = BTreeMap::new();

    for (key, bucket) in buckets {
        let totals = FundTotals::resolve(bucket);
        running += totals.net();
        balances.insert(*key, running);
    }

    balances
}
