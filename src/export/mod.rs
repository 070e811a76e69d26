//! Export module
//!
//! Serializes a filtered report into downloadable artifacts:
//! - Workbook: multi-sheet XLSX, one sheet per period
//! - Document: paginated PDF with running headers and footers
//! - CSV: flat spreadsheet-compatible rows
//!
//! The column schema per report kind is shared across all three formats.

pub mod csv;
pub mod document;
pub mod workbook;

pub use self::csv::export_csv;
pub use document::export_document;
pub use workbook::export_workbook;

use crate::config::Settings;
use crate::models::TransactionRecord;
use crate::reports::ReportKind;

/// Fixed column layout for one report kind
pub(crate) struct TableSchema {
    /// Header labels, in column order
    pub headers: &'static [&'static str],
    /// Worksheet column width hints (characters)
    pub sheet_widths: &'static [f64],
    /// Document column width hints (fractions of the table width)
    pub doc_widths: &'static [f64],
    /// Index of the right-aligned amount column
    pub amount_col: usize,
}

/// The column schema for a report kind
pub(crate) fn schema(kind: ReportKind) -> TableSchema {
    match kind {
        ReportKind::Financial => TableSchema {
            headers: &["Date", "Type", "Name", "Amount", "Source/Destination"],
            sheet_widths: &[14.0, 20.0, 20.0, 14.0, 25.0],
            doc_widths: &[0.16, 0.18, 0.22, 0.16, 0.28],
            amount_col: 3,
        },
        ReportKind::ClubFund => TableSchema {
            headers: &["Date", "Name", "Reason", "Amount", "Account"],
            sheet_widths: &[15.0, 22.0, 36.0, 15.0, 24.0],
            doc_widths: &[0.14, 0.18, 0.34, 0.14, 0.20],
            amount_col: 3,
        },
    }
}

/// Render one record as a row of cells in schema column order
///
/// Amounts are grouped for display formats and plain for machine-readable
/// output.
pub(crate) fn record_cells(
    kind: ReportKind,
    record: &TransactionRecord,
    settings: &Settings,
    grouped_amounts: bool,
) -> Vec<String> {
    let date = record.date_display(&settings.date_format);
    let amount = if grouped_amounts {
        record.amount.to_string()
    } else {
        record.amount.units().to_string()
    };

    match kind {
        ReportKind::Financial => vec![
            date,
            record.category.label().to_string(),
            record.name.clone(),
            amount,
            record.counterparty.clone(),
        ],
        ReportKind::ClubFund => vec![
            date,
            record.name.clone(),
            record.reason.clone(),
            amount,
            record.counterparty.clone(),
        ],
    }
}
