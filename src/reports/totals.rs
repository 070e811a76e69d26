//! Totals aggregation
//!
//! Derives category totals from a period bucket. Aggregation is a two-step
//! pipeline: sums are computed from the record list, then merged field-wise
//! with the bucket's precomputed totals, preferring a precomputed value
//! whenever it is nonzero. Totals are derived on every call and never
//! persisted.

use crate::models::{FlowDirection, Money, PeriodBucket, RecordCategory, TransactionRecord};

/// Totals for the monthly financial report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowTotals {
    /// Generic inflow (deposits and loan payments, absent an outflow flag)
    pub inflow: Money,
    /// Generic outflow (everything else)
    pub outflow: Money,
    /// Sum of Deposit records
    pub deposits: Money,
    /// Sum of Loan records
    pub loans: Money,
    /// Sum of Loan Payment records
    pub loan_payments: Money,
}

impl FlowTotals {
    /// Compute totals by scanning a record list
    ///
    /// The generic inflow/outflow split follows direction inference; the
    /// category sums key strictly off the record category and are independent
    /// of that split.
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut totals = Self::default();

        for record in records {
            match record.direction() {
                FlowDirection::Inflow => totals.inflow += record.amount,
                FlowDirection::Outflow => totals.outflow += record.amount,
            }

            match record.category {
                RecordCategory::Deposit => totals.deposits += record.amount,
                RecordCategory::Loan => totals.loans += record.amount,
                RecordCategory::LoanPayment => totals.loan_payments += record.amount,
                _ => {}
            }
        }

        totals
    }

    /// Resolve a bucket's totals, preferring nonzero precomputed fields
    pub fn resolve(bucket: &PeriodBucket) -> Self {
        let computed = Self::from_records(&bucket.records);
        let supplied = &bucket.totals;

        Self {
            inflow: prefer(supplied.inflow, computed.inflow),
            outflow: prefer(supplied.outflow, computed.outflow),
            deposits: prefer(supplied.deposits, computed.deposits),
            loans: prefer(supplied.loans, computed.loans),
            loan_payments: prefer(supplied.loan_payments, computed.loan_payments),
        }
    }
}

/// Totals for the annual club-fund report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FundTotals {
    /// Sum of records without the outflow flag
    pub income: Money,
    /// Sum of records with the outflow flag
    pub expenses: Money,
}

impl FundTotals {
    /// Compute totals by scanning a record list
    ///
    /// The income/expense split keys strictly off the explicit outflow flag.
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut totals = Self::default();

        for record in records {
            if record.is_outflow {
                totals.expenses += record.amount;
            } else {
                totals.income += record.amount;
            }
        }

        totals
    }

    /// Resolve a bucket's totals, preferring nonzero precomputed fields
    pub fn resolve(bucket: &PeriodBucket) -> Self {
        let computed = Self::from_records(&bucket.records);
        let supplied = &bucket.totals;

        Self {
            income: prefer(supplied.income, computed.income),
            expenses: prefer(supplied.expenses, computed.expenses),
        }
    }

    /// Net effect on the fund balance for one period
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Preference order of the two-step pipeline: a nonzero precomputed value
/// wins, otherwise the computed sum is used
fn prefer(precomputed: Money, computed: Money) -> Money {
    if precomputed.is_zero() {
        computed
    } else {
        precomputed
    }
}
