//! Report formatting for terminal output
//!
//! Renders a filtered report the way the dashboard pages lay out their
//! month/year blocks: a heading and summary block per period, followed by
//! the records table.

use std::collections::BTreeMap;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::export::{record_cells, schema};
use crate::models::{Money, PeriodKey};
use crate::reports::{FilteredReport, FlowTotals, FundTotals, ReportKind};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Render a filtered report for the terminal
pub fn render_report(
    filtered: &FilteredReport,
    kind: ReportKind,
    balances: &BTreeMap<PeriodKey, Money>,
    settings: &Settings,
) -> String {
    if filtered.is_empty() {
        return "No records found for the selected range.\n".to_string();
    }

    let mut output = String::new();

    for (key, bucket) in filtered {
        output.push_str(&format!("{}\n", key));
        output.push_str(&separator(60));
        output.push('\n');

        match kind {
            ReportKind::Financial => {
                let totals = FlowTotals::resolve(bucket);
                output.push_str(&summary_line("Total Inflow:", totals.inflow));
                output.push_str(&summary_line("Total Outflow/Loans:", totals.outflow));
                output.push_str(&summary_line("Total Loan Payments:", totals.loan_payments));
                output.push_str(&summary_line("Total Deposits:", totals.deposits));
            }
            ReportKind::ClubFund => {
                let totals = FundTotals::resolve(bucket);
                let balance = balances.get(key).copied().unwrap_or_else(|| totals.net());
                output.push_str(&summary_line("Total Income:", totals.income));
                output.push_str(&summary_line("Total Expenses:", totals.expenses));
                output.push_str(&summary_line("Account Balance:", balance));
            }
        }
        output.push('\n');

        if bucket.records.is_empty() {
            let notice = match kind {
                ReportKind::Financial => "No records for this month.",
                ReportKind::ClubFund => "No records for this year.",
            };
            output.push_str(notice);
            output.push('\n');
        } else {
            let mut builder = Builder::default();
            builder.push_record(schema(kind).headers.iter().copied());
            for record in &bucket.records {
                builder.push_record(record_cells(kind, record, settings, true));
            }

            let mut table = builder.build();
            table.with(Style::sharp());
            output.push_str(&table.to_string());
            output.push('\n');
        }

        output.push('\n');
    }

    output
}

fn summary_line(label: &str, amount: Money) -> String {
    format!("{:<22} {:>15}\n", label, amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodBucket, RecordCategory, RecordsMap, TransactionRecord};

    fn sample_map() -> RecordsMap {
        let record = TransactionRecord {
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 10),
            date_label: "2025-01-10".to_string(),
            category: RecordCategory::Deposit,
            name: "A. Member".to_string(),
            reason: String::new(),
            amount: Money::from_units(1234567),
            is_outflow: false,
            counterparty: "Club Account".to_string(),
        };

        let mut map = RecordsMap::new();
        map.insert(
            PeriodKey::parse("January 2025").unwrap(),
            PeriodBucket::from_records(vec![record]),
        );
        map
    }

    #[test]
    fn test_render_financial_report() {
        let settings = Settings::default();
        let rendered = render_report(
            &sample_map(),
            ReportKind::Financial,
            &BTreeMap::new(),
            &settings,
        );

        assert!(rendered.contains("January 2025"));
        assert!(rendered.contains("Total Inflow:"));
        assert!(rendered.contains("1,234,567"));
        assert!(rendered.contains("A. Member"));
    }

    #[test]
    fn test_render_empty_report() {
        let settings = Settings::default();
        let rendered = render_report(
            &RecordsMap::new(),
            ReportKind::Financial,
            &BTreeMap::new(),
            &settings,
        );
        assert_eq!(rendered, "No records found for the selected range.\n");
    }

    #[test]
    fn test_render_period_without_records() {
        let mut map = RecordsMap::new();
        map.insert(PeriodKey::year(2024), PeriodBucket::default());

        let settings = Settings::default();
        let rendered = render_report(&map, ReportKind::ClubFund, &BTreeMap::new(), &settings);
        assert!(rendered.contains("No records for this year."));
        assert!(rendered.contains("Account Balance:"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }
}
