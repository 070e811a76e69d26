//! GrowthSpring CLI - Terminal reporting for a cooperative savings club
//!
//! This library powers the `growthspring` binary: it loads dashboard
//! snapshots saved from the club's API, filters period-keyed ledger records
//! to an inclusive chronological range, derives totals and running balances,
//! and renders the result in the terminal or as downloadable artifacts
//! (XLSX workbook, paginated PDF document, CSV).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (periods, money, ledger records)
//! - `snapshot`: Dashboard snapshot loading and boundary validation
//! - `reports`: Range selection, totals aggregation, running balances
//! - `export`: Workbook, document, and CSV serialization
//! - `display`: Terminal rendering
//! - `cli`: Command argument types and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use growthspring::reports::{select_range, ReportKind};
//! use growthspring::snapshot::DashboardSnapshot;
//!
//! let snapshot = DashboardSnapshot::load("dashboard.json")?;
//! let filtered = select_range(snapshot.monthly_summaries(), None, None);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod snapshot;

pub use error::{ClubError, ClubResult};
