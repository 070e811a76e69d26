//! Wire shapes for the dashboard API payload
//!
//! The API returns duck-typed JSON: amounts may be numbers or formatted
//! strings, dates may be ISO timestamps or plain dates, and optional fields
//! are simply absent. Everything lenient lives here — records are coerced
//! into validated model types exactly once, at this boundary.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::models::{Money, PeriodBucket, PrecomputedTotals, RecordCategory, TransactionRecord};

/// The `{ "data": ... }` / `{ "error": ... }` envelope every endpoint uses
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub data: Option<RawDashboard>,

    #[serde(default)]
    pub error: Option<String>,
}

/// The dashboard payload carrying both admin record maps
#[derive(Debug, Default, Deserialize)]
pub struct RawDashboard {
    /// Financial records keyed by month label ("January 2025")
    #[serde(default, rename = "monthlySummaries")]
    pub monthly_summaries: HashMap<String, RawBucket>,

    /// Club-fund records keyed by year label ("2025")
    #[serde(default, rename = "clubFundAnnualSummaries")]
    pub club_fund_annual_summaries: HashMap<String, RawBucket>,
}

/// One period bucket as the API sends it
#[derive(Debug, Default, Deserialize)]
pub struct RawBucket {
    #[serde(default)]
    pub records: Vec<RawRecord>,

    #[serde(default, rename = "totalInflow")]
    pub total_inflow: Value,

    #[serde(default, rename = "totalOutflow")]
    pub total_outflow: Value,

    #[serde(default, rename = "totalDeposits")]
    pub total_deposits: Value,

    #[serde(default, rename = "totalLoans")]
    pub total_loans: Value,

    #[serde(default, rename = "totalLoanPayments")]
    pub total_loan_payments: Value,

    #[serde(default, rename = "totalIncome")]
    pub total_income: Value,

    #[serde(default, rename = "totalExpenses")]
    pub total_expenses: Value,
}

/// One ledger record as the API sends it
#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: Value,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub amount: Value,

    #[serde(default, rename = "isOutflow")]
    pub is_outflow: bool,

    #[serde(default)]
    pub destination: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub account: Option<String>,
}

impl RawBucket {
    /// Validate this bucket into the model type
    pub fn into_bucket(self) -> PeriodBucket {
        let totals = PrecomputedTotals {
            inflow: coerce_amount(&self.total_inflow),
            outflow: coerce_amount(&self.total_outflow),
            deposits: coerce_amount(&self.total_deposits),
            loans: coerce_amount(&self.total_loans),
            loan_payments: coerce_amount(&self.total_loan_payments),
            income: coerce_amount(&self.total_income),
            expenses: coerce_amount(&self.total_expenses),
        };

        let records = self.records.into_iter().map(RawRecord::into_record).collect();

        PeriodBucket { records, totals }
    }
}

impl RawRecord {
    /// Validate this record into the model type
    pub fn into_record(self) -> TransactionRecord {
        let date_label = value_to_label(&self.date);
        let date = parse_date(&date_label);

        // Club-fund records carry no `type`; their category is implied by the
        // direction flag.
        let category = match self.kind {
            Some(label) => RecordCategory::from_label(&label),
            None if self.is_outflow => RecordCategory::Expense,
            None => RecordCategory::Income,
        };

        let counterparty = self
            .destination
            .or(self.source)
            .or(self.account)
            .unwrap_or_default();

        TransactionRecord {
            date,
            date_label,
            category,
            name: self.name,
            reason: self.reason,
            amount: coerce_amount(&self.amount),
            is_outflow: self.is_outflow,
            counterparty,
        }
    }
}

/// Coerce a JSON amount to Money
///
/// Numbers pass through; strings are cleaned of thousands separators and
/// parsed. Anything unparseable contributes zero instead of failing the load.
pub fn coerce_amount(value: &Value) -> Money {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| Money::from_units(f.round() as i64))
            .unwrap_or_default(),
        Value::String(s) => Money::parse(s).unwrap_or_else(|_| {
            debug!(amount = %s, "unparseable amount coerced to zero");
            Money::zero()
        }),
        _ => Money::zero(),
    }
}

/// Render a JSON date value as a display label
fn value_to_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse a record date from an RFC 3339 timestamp or a plain `YYYY-MM-DD`
fn parse_date(label: &str) -> Option<NaiveDate> {
    if label.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(label) {
        return Some(ts.date_naive());
    }

    NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_amount_number() {
        assert_eq!(coerce_amount(&json!(500000)).units(), 500000);
        assert_eq!(coerce_amount(&json!(1234.6)).units(), 1235);
    }

    #[test]
    fn test_coerce_amount_grouped_string() {
        assert_eq!(coerce_amount(&json!("1,234")).units(), 1234);
    }

    #[test]
    fn test_coerce_amount_unparseable_is_zero() {
        assert_eq!(coerce_amount(&json!("n/a")).units(), 0);
        assert_eq!(coerce_amount(&json!(null)).units(), 0);
        assert_eq!(coerce_amount(&json!({"nested": true})).units(), 0);
    }

    #[test]
    fn test_record_date_parsing() {
        let raw: RawRecord = serde_json::from_value(json!({
            "date": "2025-01-15T08:30:00Z",
            "type": "Deposit",
            "name": "A. Member",
            "amount": 1000
        }))
        .unwrap();
        let record = raw.into_record();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(record.category, RecordCategory::Deposit);
    }

    #[test]
    fn test_record_unparseable_date_keeps_label() {
        let raw: RawRecord = serde_json::from_value(json!({
            "date": "mid January",
            "type": "Loan",
            "amount": "2,500"
        }))
        .unwrap();
        let record = raw.into_record();
        assert_eq!(record.date, None);
        assert_eq!(record.date_label, "mid January");
        assert_eq!(record.amount.units(), 2500);
    }

    #[test]
    fn test_fund_record_category_from_flag() {
        let expense: RawRecord = serde_json::from_value(json!({
            "date": "2024-03-01",
            "name": "Hosting",
            "reason": "Web hosting services",
            "amount": 120000,
            "isOutflow": true,
            "account": "Main Account"
        }))
        .unwrap();
        let record = expense.into_record();
        assert_eq!(record.category, RecordCategory::Expense);
        assert_eq!(record.counterparty, "Main Account");
        assert_eq!(record.reason, "Web hosting services");

        let income: RawRecord = serde_json::from_value(json!({
            "date": "2024-03-02",
            "name": "IT refund",
            "amount": 50000
        }))
        .unwrap();
        assert_eq!(income.into_record().category, RecordCategory::Income);
    }

    #[test]
    fn test_counterparty_preference_order() {
        let raw: RawRecord = serde_json::from_value(json!({
            "date": "2024-01-01",
            "type": "Deposit",
            "amount": 100,
            "destination": "Club Account",
            "source": "Member Wallet"
        }))
        .unwrap();
        assert_eq!(raw.into_record().counterparty, "Club Account");
    }

    #[test]
    fn test_bucket_precomputed_totals() {
        let raw: RawBucket = serde_json::from_value(json!({
            "records": [],
            "totalInflow": 100000,
            "totalDeposits": "75,000"
        }))
        .unwrap();
        let bucket = raw.into_bucket();
        assert_eq!(bucket.totals.inflow.units(), 100000);
        assert_eq!(bucket.totals.deposits.units(), 75000);
        assert_eq!(bucket.totals.outflow.units(), 0);
    }
}
