//! CLI commands for report export
//!
//! Provides commands for exporting filtered reports as XLSX workbooks,
//! paginated PDF documents, or CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::error;

use crate::config::Settings;
use crate::error::{ClubError, ClubResult};
use crate::export::{export_csv, export_document, export_workbook};
use crate::reports::{running_balances, ReportKind};
use crate::snapshot::DashboardSnapshot;

use super::{apply_filter, records_for, ReportTarget};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Multi-sheet XLSX workbook (one sheet per period)
    Workbook,
    /// Paginated PDF document
    Document,
    /// Flat CSV
    Csv,
}

/// Arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Which report to export
    #[arg(value_enum)]
    pub target: ReportTarget,

    /// Path to the dashboard snapshot JSON
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "workbook")]
    pub format: ExportFormat,

    /// Start period label, e.g. "January 2025" or "2024"
    #[arg(long)]
    pub from: Option<String>,

    /// End period label (inclusive)
    #[arg(long)]
    pub to: Option<String>,

    /// Output file path (defaults to the report's fixed filename)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `export` command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> ClubResult<()> {
    let snapshot = DashboardSnapshot::load(&args.snapshot)?;
    let kind = args.target.kind();
    let map = records_for(&snapshot, kind);

    // Balances cover the complete history, independent of the filter
    let balances = running_balances(map);
    let filtered = apply_filter(map, args.from.as_deref(), args.to.as_deref());

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_filename(kind, args.format)));

    match args.format {
        ExportFormat::Workbook => {
            export_workbook(&filtered, kind, &balances, settings, &output)?;
        }
        ExportFormat::Document => {
            // A partially drawn document cannot be resumed; surface the
            // failure and leave no file behind.
            if let Err(err) = export_document(&filtered, kind, &balances, settings, &output) {
                error!(error = %err, "document export failed");
                eprintln!("Document export failed. No file was saved.");
                return Err(err);
            }
        }
        ExportFormat::Csv => {
            let file = File::create(&output).map_err(|e| {
                ClubError::Export(format!("Failed to create file {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_csv(&filtered, kind, settings, &mut writer)?;
        }
    }

    println!(
        "Exported {} period(s) to: {}",
        filtered.len(),
        output.display()
    );

    Ok(())
}

/// The fixed output filename for a report kind and format
fn default_filename(kind: ReportKind, format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Workbook => kind.workbook_filename(),
        ExportFormat::Document => kind.document_filename(),
        ExportFormat::Csv => kind.csv_filename(),
    }
}
