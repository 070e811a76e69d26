//! Core data models
//!
//! Periods, money, ledger records, and the period-keyed bucket map that the
//! report engine consumes.

pub mod bucket;
pub mod money;
pub mod period;
pub mod record;

pub use bucket::{PeriodBucket, PrecomputedTotals, RecordsMap};
pub use money::{Money, MoneyParseError};
pub use period::{sort_labels, PeriodKey};
pub use record::{FlowDirection, RecordCategory, TransactionRecord};
