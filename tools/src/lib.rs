//! # Datahost tools - Hurl scenarios and CSV preparation
//!
//! Tooling around the Datahost dataset publishing API: a generator for
//! hurl scripts that walk a dataset through its lifecycle, and a handful
//! of CSV utilities used to prepare the change files those scripts upload.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ schema + args│────▶│   Scenario   │────▶│    Render    │────▶│ hurl script  │
//! │  (CLI args)  │     │ (operations) │     │ (per block)  │     │   (stdout)   │
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use datahost::{ScenarioBuilder, ScenarioConfig};
//!
//! let script = ScenarioBuilder::new(ScenarioConfig::local())
//!     .build(&["schema.json", "revision", "appends:file1.csv"])
//!     .unwrap();
//! assert!(script.starts_with("PUT http://localhost:3000/data/{{series}}"));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Scenario rendering options
//! - [`scenario`] - Operation model, argument grammar, hurl rendering
//! - [`parser`] - CSV reading/writing with auto-detection
//! - [`prep`] - CSV preparation utilities
//! - [`log`] - Leveled stderr logging

// Core modules
pub mod config;
pub mod error;

// Hurl generation
pub mod scenario;

// CSV
pub mod parser;
pub mod prep;

// Logging
pub mod log;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{BuildError, BuildResult, PrepError, PrepResult, ToolError, ToolResult};

// =============================================================================
// Re-exports - Scenario
// =============================================================================

pub use config::ScenarioConfig;
pub use scenario::{ChangeKind, Operation, Scenario, ScenarioBuilder, USAGE};

// =============================================================================
// Re-exports - CSV
// =============================================================================

pub use parser::{
    parse_table,
    parse_bytes_auto,
    read_table_auto,
    write_table,
    write_table_to,
    detect_encoding,
    detect_delimiter,
    decode_content,
    CsvError,
    ParsedTable,
    Table,
};

pub use prep::{DedupReport, UnitMap, YearSplit};
