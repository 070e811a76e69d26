//! CSV export
//!
//! Flattens a filtered report into spreadsheet-compatible rows: a period
//! column followed by the report kind's record columns, with amounts in plain
//! numeric form.

use std::io::Write;

use crate::config::Settings;
use crate::error::ClubResult;
use crate::reports::{FilteredReport, ReportKind};

use super::{record_cells, schema};

/// Write a filtered report as CSV
pub fn export_csv<W: Write>(
    filtered: &FilteredReport,
    kind: ReportKind,
    settings: &Settings,
    writer: W,
) -> ClubResult<()> {
    let schema = schema(kind);
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Period".to_string()];
    header.extend(schema.headers.iter().map(|h| h.to_string()));
    wtr.write_record(&header)?;

    for (key, bucket) in filtered {
        let period = key.to_string();
        for record in &bucket.records {
            let mut row = vec![period.clone()];
            row.extend(record_cells(kind, record, settings, false));
            wtr.write_record(&row)?;
        }
    }

    wtr.flush().map_err(|e| crate::error::ClubError::Export(e.to_string()))?;
    Ok(())
}
