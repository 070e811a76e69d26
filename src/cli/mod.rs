//! CLI commands
//!
//! Command argument types and handlers. The handlers own the filter policy
//! around the range selector: unparseable bound labels degrade to an open
//! bound, and reversed bounds are swapped before selection.

pub mod export;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportArgs};

use clap::ValueEnum;
use tracing::{info, warn};

use crate::models::{PeriodKey, RecordsMap};
use crate::reports::{select_range, FilteredReport, ReportKind};
use crate::snapshot::DashboardSnapshot;

/// Which admin report to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportTarget {
    /// Monthly financial records (deposits, loans, loan payments)
    Financial,
    /// Annual club-fund records (income and expenses)
    Fund,
}

impl ReportTarget {
    /// The report kind this target selects
    pub fn kind(self) -> ReportKind {
        match self {
            Self::Financial => ReportKind::Financial,
            Self::Fund => ReportKind::ClubFund,
        }
    }
}

/// The snapshot record map a report kind reads
pub(crate) fn records_for(snapshot: &DashboardSnapshot, kind: ReportKind) -> &RecordsMap {
    match kind {
        ReportKind::Financial => snapshot.monthly_summaries(),
        ReportKind::ClubFund => snapshot.annual_summaries(),
    }
}

/// Parse the filter bound labels and apply the range selection
///
/// When both bounds parse and start is after end, the labels are swapped
/// before the selector runs.
pub(crate) fn apply_filter(
    map: &RecordsMap,
    from: Option<&str>,
    to: Option<&str>,
) -> FilteredReport {
    let mut start = parse_bound(from);
    let mut end = parse_bound(to);

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            info!(start = %s, end = %e, "start is after end, swapping bounds");
            std::mem::swap(&mut start, &mut end);
        }
    }

    select_range(map, start.as_ref(), end.as_ref())
}

fn parse_bound(label: Option<&str>) -> Option<PeriodKey> {
    let label = label?;
    match PeriodKey::parse(label) {
        Some(key) => Some(key),
        None => {
            warn!(label = %label, "ignoring unparseable filter bound");
            None
        }
    }
}
