//! The period-filtered report engine
//!
//! Raw period-keyed records flow one direction: range selection (filter),
//! totals aggregation (derive), then rendering to an output format. The
//! engine reads caller-supplied bucket maps and returns derived structures;
//! it performs no I/O of its own.

pub mod balance;
pub mod range;
pub mod totals;

pub use balance::running_balances;
pub use range::select_range;
pub use totals::{FlowTotals, FundTotals};

use crate::models::RecordsMap;

/// A records mapping restricted to an inclusive chronological range
pub type FilteredReport = RecordsMap;

/// Which admin report a filtered map feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Monthly financial records (deposits, loans, loan payments)
    Financial,

    /// Annual club-fund records (income and expenses)
    ClubFund,
}

impl ReportKind {
    /// Report title shown in document headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Financial => "Financial Records Report",
            Self::ClubFund => "Fund Transactions Report",
        }
    }

    /// The period label prefix ("Month: January 2025" / "Year: 2024")
    pub fn period_prefix(&self) -> &'static str {
        match self {
            Self::Financial => "Month",
            Self::ClubFund => "Year",
        }
    }

    /// Fixed workbook output filename
    pub fn workbook_filename(&self) -> &'static str {
        match self {
            Self::Financial => "financial_records.xlsx",
            Self::ClubFund => "club_fund_annual_records.xlsx",
        }
    }

    /// Fixed document output filename
    pub fn document_filename(&self) -> &'static str {
        match self {
            Self::Financial => "financial_records.pdf",
            Self::ClubFund => "club_fund_annual_records.pdf",
        }
    }

    /// Fixed CSV output filename
    pub fn csv_filename(&self) -> &'static str {
        match self {
            Self::Financial => "financial_records.csv",
            Self::ClubFund => "club_fund_annual_records.csv",
        }
    }
}

/// Human-readable label for the selected range of a filtered report
pub fn range_label(filtered: &FilteredReport) -> String {
    let mut keys = filtered.keys();

    match (keys.next(), keys.next_back()) {
        (None, _) => "No range selected".to_string(),
        (Some(only), None) => only.to_string(),
        (Some(first), Some(last)) => format!("{} – {}", first, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodBucket, PeriodKey};

    #[test]
    fn test_range_label() {
        let mut map = RecordsMap::new();
        assert_eq!(range_label(&map), "No range selected");

        map.insert(PeriodKey::year(2023), PeriodBucket::default());
        assert_eq!(range_label(&map), "2023");

        map.insert(PeriodKey::year(2024), PeriodBucket::default());
        assert_eq!(range_label(&map), "2023 – 2024");
    }

    #[test]
    fn test_fixed_filenames() {
        assert_eq!(ReportKind::Financial.workbook_filename(), "financial_records.xlsx");
        assert_eq!(
            ReportKind::ClubFund.document_filename(),
            "club_fund_annual_records.pdf"
        );
    }
}
