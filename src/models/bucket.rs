//! Period buckets
//!
//! The record set for one period key, with the totals the API sometimes
//! precomputes server-side. Buckets are read-only inputs to the report
//! engine; aggregation produces derived copies and never mutates them.

use std::collections::BTreeMap;

use super::money::Money;
use super::period::PeriodKey;
use super::record::TransactionRecord;

/// Server-precomputed totals for one bucket
///
/// Every field defaults to zero; a zero field means "not supplied" and the
/// aggregator falls back to summing the records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrecomputedTotals {
    pub inflow: Money,
    pub outflow: Money,
    pub deposits: Money,
    pub loans: Money,
    pub loan_payments: Money,
    pub income: Money,
    pub expenses: Money,
}

/// The record set for one period key
#[derive(Debug, Clone, Default)]
pub struct PeriodBucket {
    /// Ledger entries in the order the API returned them
    pub records: Vec<TransactionRecord>,

    /// Optional server-side totals, preferred over recomputation when nonzero
    pub totals: PrecomputedTotals,
}

impl PeriodBucket {
    /// Create a bucket holding the given records and no precomputed totals
    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            records,
            totals: PrecomputedTotals::default(),
        }
    }
}

/// A period-keyed records mapping in chronological order
pub type RecordsMap = BTreeMap<PeriodKey, PeriodBucket>;
