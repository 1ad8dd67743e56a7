//! Error types for the Datahost tooling.
//!
//! This module defines one error type per concern:
//!
//! - [`BuildError`] - Hurl scenario argument errors
//! - [`PrepError`] - CSV data-preparation errors
//! - [`ToolError`] - Top-level CLI errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

use crate::parser::CsvError;

// =============================================================================
// Scenario Build Errors
// =============================================================================

/// Errors while turning generator arguments into a scenario.
///
/// The first error aborts the build; no partial script is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Missing schema path or missing leading `revision`.
    #[error("expected a schema file path followed by `revision`")]
    Usage,

    /// The token after the schema path is not `revision`.
    #[error("sequence must start with a revision, found '{found}'")]
    Sequence { found: String },

    /// Token is neither `revision` nor a `KIND:FILE` pair.
    #[error("malformed change token '{token}', expected KIND:FILE")]
    MalformedChangeToken { token: String },

    /// Change kind is not one of appends, retractions, corrections.
    #[error("unknown change kind '{kind}' in '{token}' (expected appends, retractions or corrections)")]
    UnknownChangeKind { kind: String, token: String },
}

impl BuildError {
    /// The offending token, if the error is tied to one.
    pub fn token(&self) -> Option<&str> {
        match self {
            BuildError::Usage => None,
            BuildError::Sequence { found } => Some(found),
            BuildError::MalformedChangeToken { token } => Some(token),
            BuildError::UnknownChangeKind { token, .. } => Some(token),
        }
    }
}

// =============================================================================
// Data Preparation Errors
// =============================================================================

/// Errors from the CSV preparation utilities.
#[derive(Debug, Error)]
pub enum PrepError {
    /// Table could not be parsed or written.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A column the utility relies on is absent from the header.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Column index beyond the header width.
    #[error("Column index {index} out of range for {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },

    /// Unit mapping file is not a JSON object of strings.
    #[error("Invalid unit mapping: {0}")]
    Mapping(#[from] serde_json::Error),

    /// Table has no header row.
    #[error("CSV file is empty")]
    EmptyTable,
}

// =============================================================================
// Top-level Errors
// =============================================================================

/// Errors surfaced by the command-line binaries.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Scenario generation error.
    #[error("{0}")]
    Build(#[from] BuildError),

    /// Data preparation error.
    #[error("{0}")]
    Prep(#[from] PrepError),

    /// Plan serialization error.
    #[error("JSON error: {0}")]
    Json(serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for scenario building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Result type for preparation utilities.
pub type PrepResult<T> = Result<T, PrepError>;

/// Result type for CLI commands.
pub type ToolResult<T> = Result<T, ToolError>;
