//! Ledger record model
//!
//! One row of a period bucket: a deposit, loan, loan payment, or club-fund
//! income/expense entry. The dashboard API identifies the category with a
//! free-form string; that string is resolved to a tagged `RecordCategory` at
//! the snapshot boundary so downstream code never string-compares.

use std::fmt;

use chrono::NaiveDate;

use super::money::Money;

/// Record category, resolved from the API's `type` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCategory {
    /// A member deposit into the club
    Deposit,
    /// A repayment against an outstanding loan
    LoanPayment,
    /// A loan disbursed to a member
    Loan,
    /// Club-fund income
    Income,
    /// Club-fund expense
    Expense,
    /// Any category the API sends that we do not recognize
    Other(String),
}

impl RecordCategory {
    /// Resolve a category label from the API
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Deposit" => Self::Deposit,
            "Loan Payment" => Self::LoanPayment,
            "Loan" => Self::Loan,
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }

    /// The category label as shown in reports
    pub fn label(&self) -> &str {
        match self {
            Self::Deposit => "Deposit",
            Self::LoanPayment => "Loan Payment",
            Self::Loan => "Loan",
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(label) => label,
        }
    }

    /// Whether this category counts as inflow when no explicit direction flag
    /// is present (deposits and loan payments add to member balances)
    pub fn is_known_inflow(&self) -> bool {
        matches!(self, Self::Deposit | Self::LoanPayment)
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Directional effect of a record on the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Inflow,
    Outflow,
}

/// One ledger entry within a period bucket
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    /// Record date, when the API value parsed to a calendar date
    pub date: Option<NaiveDate>,

    /// The raw date string from the API, shown as-is when unparseable
    pub date_label: String,

    /// Record category
    pub category: RecordCategory,

    /// Member or counterpart name
    pub name: String,

    /// Reason text (club-fund records; empty elsewhere)
    pub reason: String,

    /// Record amount (non-negative; direction is carried separately)
    pub amount: Money,

    /// Explicit outflow flag from the API
    pub is_outflow: bool,

    /// Destination, source, or account label, whichever the API supplied
    pub counterparty: String,
}

impl TransactionRecord {
    /// The record's directional effect: outflow when the explicit flag is set
    /// or the category is not a known inflow type
    pub fn direction(&self) -> FlowDirection {
        if self.is_outflow || !self.category.is_known_inflow() {
            FlowDirection::Outflow
        } else {
            FlowDirection::Inflow
        }
    }

    /// Format the record date with the given chrono format string, falling
    /// back to the raw label when the date did not parse
    pub fn date_display(&self, format: &str) -> String {
        match self.date {
            Some(date) => date.format(format).to_string(),
            None => self.date_label.clone(),
        }
    }
}
