//! CLI command for rendering reports in the terminal

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::render_report;
use crate::error::ClubResult;
use crate::reports::running_balances;
use crate::snapshot::DashboardSnapshot;

use super::{apply_filter, records_for, ReportTarget};

/// Arguments for the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Which report to render
    #[arg(value_enum)]
    pub target: ReportTarget,

    /// Path to the dashboard snapshot JSON
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Start period label, e.g. "January 2025" or "2024"
    #[arg(long)]
    pub from: Option<String>,

    /// End period label (inclusive)
    #[arg(long)]
    pub to: Option<String>,
}

/// Handle the `report` command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> ClubResult<()> {
    let snapshot = DashboardSnapshot::load(&args.snapshot)?;
    let kind = args.target.kind();
    let map = records_for(&snapshot, kind);

    // Balances cover the complete history, independent of the filter
    let balances = running_balances(map);
    let filtered = apply_filter(map, args.from.as_deref(), args.to.as_deref());

    print!("{}", render_report(&filtered, kind, &balances, settings));
    Ok(())
}
