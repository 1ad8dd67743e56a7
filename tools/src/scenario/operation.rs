//! Lifecycle operations of a generated scenario.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal token that opens a new revision.
pub const REVISION_TOKEN: &str = "revision";

/// The semantic effect of a change applied within a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Appends,
    Retractions,
    Corrections,
}

impl ChangeKind {
    /// All recognized kinds, in documentation order.
    pub const ALL: [ChangeKind; 3] = [
        ChangeKind::Appends,
        ChangeKind::Retractions,
        ChangeKind::Corrections,
    ];

    /// Literal used on the command line and in change URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Appends => "appends",
            ChangeKind::Retractions => "retractions",
            ChangeKind::Corrections => "corrections",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// One step of the dataset lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// Create dataset and release, upload the schema. Always first, exactly once.
    DatasetSetup { schema_file: String },

    /// Open revision `revision` (numbered from 1).
    RevisionOpen { revision: u32 },

    /// Apply a change file to an already opened revision.
    ChangeApply {
        kind: ChangeKind,
        file: String,
        revision: u32,
    },
}

impl Operation {
    /// Revision this operation opens or targets.
    pub fn revision(&self) -> Option<u32> {
        match self {
            Operation::DatasetSetup { .. } => None,
            Operation::RevisionOpen { revision } => Some(*revision),
            Operation::ChangeApply { revision, .. } => Some(*revision),
        }
    }
}

/// Hurl variable capturing the location of revision `revision`.
///
/// Written into the revision's `[Captures]` and read back by every change
/// attached to it, so both sides must derive it here.
pub fn revision_url_var(revision: u32) -> String {
    format!("revision{}_url", revision)
}
