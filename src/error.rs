//! Custom error types for the GrowthSpring reporting CLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for GrowthSpring operations
#[derive(Error, Debug)]
pub enum ClubError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Snapshot loading/decoding errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// The API payload carried an error envelope instead of data
    #[error("API error: {0}")]
    Api(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors (CSV and shared export plumbing)
    #[error("Export error: {0}")]
    Export(String),

    /// Workbook (XLSX) export errors
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Document (PDF) export errors
    #[error("Document error: {0}")]
    Document(String),
}

impl ClubError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the API error envelope
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ClubError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ClubError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ClubError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(err.to_string())
    }
}

/// Result type alias for GrowthSpring operations
pub type ClubResult<T> = Result<T, ClubError>;
