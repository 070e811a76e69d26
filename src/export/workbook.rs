//! Tabular workbook export
//!
//! Serializes a filtered report into a multi-sheet XLSX workbook: one sheet
//! per period, each carrying the period's totals, a header row, and one row
//! per record. An empty filtered report still produces a single sheet with a
//! "no records" notice so the saved file is never sheetless.

use std::collections::BTreeMap;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::config::Settings;
use crate::error::ClubResult;
use crate::models::{Money, PeriodBucket, PeriodKey};
use crate::reports::{FilteredReport, FlowTotals, FundTotals, ReportKind};

use super::{record_cells, schema, TableSchema};

/// Worksheet titles are capped by the XLSX format
const MAX_SHEET_NAME: usize = 31;

/// Write a filtered report as an XLSX workbook
pub fn export_workbook(
    filtered: &FilteredReport,
    kind: ReportKind,
    balances: &BTreeMap<PeriodKey, Money>,
    settings: &Settings,
    path: &Path,
) -> ClubResult<()> {
    let mut workbook = Workbook::new();

    if filtered.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name("No records")?;
        sheet.write_string(0, 0, "No records found for the selected range.")?;
        workbook.save(path)?;
        return Ok(());
    }

    let bold = Format::new().set_bold();
    let schema = schema(kind);

    for (key, bucket) in filtered {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_title(&key.to_string()))?;

        write_summary(sheet, kind, key, bucket, balances)?;

        // Row 2 stays blank as a separator
        for (col, header) in schema.headers.iter().enumerate() {
            sheet.write_string_with_format(3, col as u16, *header, &bold)?;
        }

        for (row, record) in bucket.records.iter().enumerate() {
            let cells = record_cells(kind, record, settings, true);
            for (col, cell) in cells.iter().enumerate() {
                sheet.write_string(row as u32 + 4, col as u16, cell.as_str())?;
            }
        }

        apply_column_widths(sheet, &schema)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Write the per-period totals lines (rows 0-1)
fn write_summary(
    sheet: &mut Worksheet,
    kind: ReportKind,
    key: &PeriodKey,
    bucket: &PeriodBucket,
    balances: &BTreeMap<PeriodKey, Money>,
) -> ClubResult<()> {
    match kind {
        ReportKind::Financial => {
            let totals = FlowTotals::resolve(bucket);
            sheet.write_string(0, 0, format!("Total Inflow: {}", totals.inflow))?;
            sheet.write_string(0, 1, format!("Total Outflow: {}", totals.outflow))?;
            sheet.write_string(1, 0, format!("Total Deposits: {}", totals.deposits))?;
            sheet.write_string(1, 1, format!("Total Loans: {}", totals.loans))?;
            sheet.write_string(1, 2, format!("Total Loan Payments: {}", totals.loan_payments))?;
        }
        ReportKind::ClubFund => {
            let totals = FundTotals::resolve(bucket);
            let balance = balances.get(key).copied().unwrap_or_else(|| totals.net());
            sheet.write_string(0, 0, format!("Total Income: {}", totals.income))?;
            sheet.write_string(0, 1, format!("Total Expenses: {}", totals.expenses))?;
            sheet.write_string(1, 0, format!("Account Balance: {}", balance))?;
        }
    }

    Ok(())
}

/// Apply the schema's presentational column width hints
fn apply_column_widths(sheet: &mut Worksheet, schema: &TableSchema) -> ClubResult<()> {
    for (col, width) in schema.sheet_widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    Ok(())
}

/// Truncate a period label to a legal worksheet title
fn sheet_title(label: &str) -> String {
    label.chars().take(MAX_SHEET_NAME).collect()
}
