//! Dashboard snapshot loading
//!
//! The data-fetching layer (outside this tool) talks to the club API and
//! saves the JSON payload to disk; this module loads that file, unwraps the
//! `{data}`/`{error}` envelope, and validates the wire records into the
//! period-keyed maps the report engine consumes. Unparseable period keys are
//! dropped here, never surfaced as errors.

pub mod wire;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{ClubError, ClubResult};
use crate::models::{PeriodKey, RecordsMap};
use wire::{ApiEnvelope, RawBucket};

/// A validated snapshot of the admin dashboard data
#[derive(Debug, Default)]
pub struct DashboardSnapshot {
    monthly: RecordsMap,
    annual: RecordsMap,
}

impl DashboardSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> ClubResult<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .map_err(|e| ClubError::Snapshot(format!("Failed to open {}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);

        let envelope: ApiEnvelope = serde_json::from_reader(reader)
            .map_err(|e| ClubError::Snapshot(format!("Failed to parse {}: {}", path.display(), e)))?;

        Self::from_envelope(envelope)
    }

    /// Build a snapshot from a JSON string (used by tests and pipes)
    pub fn from_json_str(payload: &str) -> ClubResult<Self> {
        let envelope: ApiEnvelope = serde_json::from_str(payload)?;
        Self::from_envelope(envelope)
    }

    fn from_envelope(envelope: ApiEnvelope) -> ClubResult<Self> {
        if let Some(message) = envelope.error {
            return Err(ClubError::Api(message));
        }

        let dashboard = envelope
            .data
            .ok_or_else(|| ClubError::Snapshot("payload carries neither data nor error".into()))?;

        Ok(Self {
            monthly: validate_map(dashboard.monthly_summaries),
            annual: validate_map(dashboard.club_fund_annual_summaries),
        })
    }

    /// Financial records keyed by month, in chronological order
    pub fn monthly_summaries(&self) -> &RecordsMap {
        &self.monthly
    }

    /// Club-fund records keyed by year, in chronological order
    pub fn annual_summaries(&self) -> &RecordsMap {
        &self.annual
    }
}

/// Validate a label-keyed wire map into a chronologically ordered RecordsMap
fn validate_map(raw: HashMap<String, RawBucket>) -> RecordsMap {
    let mut map = RecordsMap::new();

    for (label, bucket) in raw {
        match PeriodKey::parse(&label) {
            Some(key) => {
                map.insert(key, bucket.into_bucket());
            }
            None => debug!(label = %label, "dropping bucket with unparseable period key"),
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PAYLOAD: &str = r#"{
        "data": {
            "monthlySummaries": {
                "January 2025": {
                    "records": [
                        {"date": "2025-01-10", "type": "Deposit", "name": "A. Member", "amount": "1,234", "destination": "Club Account"}
                    ],
                    "totalInflow": 1234
                },
                "not a month": { "records": [] }
            },
            "clubFundAnnualSummaries": {
                "2024": {
                    "records": [
                        {"date": "2024-06-01", "name": "Donation", "reason": "Annual gala", "amount": 50000, "account": "Main"}
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PAYLOAD.as_bytes()).unwrap();

        let snapshot = DashboardSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.monthly_summaries().len(), 1);
        assert_eq!(snapshot.annual_summaries().len(), 1);
    }

    #[test]
    fn test_invalid_period_keys_are_dropped() {
        let snapshot = DashboardSnapshot::from_json_str(PAYLOAD).unwrap();
        let keys: Vec<String> = snapshot
            .monthly_summaries()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["January 2025"]);
    }

    #[test]
    fn test_amount_coercion_through_snapshot() {
        let snapshot = DashboardSnapshot::from_json_str(PAYLOAD).unwrap();
        let key = PeriodKey::parse("January 2025").unwrap();
        let bucket = &snapshot.monthly_summaries()[&key];
        assert_eq!(bucket.records[0].amount.units(), 1234);
        assert_eq!(bucket.records[0].category, RecordCategory::Deposit);
    }

    #[test]
    fn test_error_envelope() {
        let err = DashboardSnapshot::from_json_str(r#"{"error": "Unauthorized"}"#).unwrap_err();
        assert!(err.is_api());
    }

    #[test]
    fn test_empty_envelope_is_rejected() {
        let err = DashboardSnapshot::from_json_str("{}").unwrap_err();
        assert!(matches!(err, ClubError::Snapshot(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DashboardSnapshot::load("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, ClubError::Snapshot(_)));
    }
}
