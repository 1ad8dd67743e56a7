//! Argument grammar and operation-sequence construction.
//!
//! ```text
//! <schema-file-path> revision [<kind>:<file-path> | revision]...
//! ```

use crate::config::ScenarioConfig;
use crate::error::{BuildError, BuildResult};

use super::operation::{ChangeKind, Operation, REVISION_TOKEN};
use super::render;

/// A parsed scenario: the ordered lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    operations: Vec<Operation>,
}

impl Scenario {
    /// Parse generator arguments into an operation sequence.
    ///
    /// `args[0]` is the schema path and `args[1]` must be `revision`.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> BuildResult<Self> {
        let (schema_file, rest) = match args {
            [schema, rest @ ..] if !rest.is_empty() => (AsRef::<str>::as_ref(schema), rest),
            _ => return Err(BuildError::Usage),
        };

        let first: &str = rest[0].as_ref();
        if first != REVISION_TOKEN {
            return Err(BuildError::Sequence {
                found: first.to_string(),
            });
        }

        let mut operations = vec![
            Operation::DatasetSetup {
                schema_file: schema_file.to_string(),
            },
            Operation::RevisionOpen { revision: 1 },
        ];
        let mut current_revision = 1;

        for token in &rest[1..] {
            let token: &str = token.as_ref();
            if token == REVISION_TOKEN {
                current_revision += 1;
                operations.push(Operation::RevisionOpen {
                    revision: current_revision,
                });
                continue;
            }

            let (kind, file) = parse_change_token(token)?;
            operations.push(Operation::ChangeApply {
                kind,
                file: file.to_string(),
                revision: current_revision,
            });
        }

        Ok(Self { operations })
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of opened revisions (including the mandatory first one).
    pub fn revision_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::RevisionOpen { .. }))
            .count()
    }

    /// Number of change-apply operations.
    pub fn change_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::ChangeApply { .. }))
            .count()
    }

    /// Render each operation, then the trailing run comment.
    pub fn render_blocks(&self, config: &ScenarioConfig) -> Vec<String> {
        let mut blocks: Vec<String> = self
            .operations
            .iter()
            .map(|op| render::render_operation(op, config))
            .collect();
        blocks.push(render::render_run_comment(config));
        blocks
    }

    /// The complete hurl script.
    pub fn render(&self, config: &ScenarioConfig) -> String {
        self.render_blocks(config).join("\n\n")
    }
}

/// Split `KIND:FILE` on the first `:`.
fn parse_change_token(token: &str) -> BuildResult<(ChangeKind, &str)> {
    let (kind, file) = match token.split_once(':') {
        Some((kind, file)) if !file.is_empty() => (kind, file),
        _ => {
            return Err(BuildError::MalformedChangeToken {
                token: token.to_string(),
            })
        }
    };

    let kind = kind
        .parse::<ChangeKind>()
        .map_err(|kind| BuildError::UnknownChangeKind {
            kind,
            token: token.to_string(),
        })?;

    Ok((kind, file))
}

/// Builds hurl scripts with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    config: ScenarioConfig,
}

impl ScenarioBuilder {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Parse `args` and render the script in one pass.
    pub fn build<S: AsRef<str>>(&self, args: &[S]) -> BuildResult<String> {
        Ok(Scenario::parse(args)?.render(&self.config))
    }
}
