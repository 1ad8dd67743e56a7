//! Hurl scenario generation for the dataset publishing API.
//!
//! This module turns a flat argument list into an ordered sequence of
//! lifecycle operations and renders it as a hurl script:
//! - `operation`: Data model (operations, change kinds)
//! - `builder`: Argument grammar and sequence construction
//! - `render`: One typed renderer per operation
//!
//! ## Usage Flow
//!
//! ```text
//! args → Scenario::parse → [DatasetSetup, RevisionOpen(1), ChangeApply.., RevisionOpen(2), ..] → render → script
//! ```
//!
//! ## Example
//!
//! ```rust
//! use datahost::scenario::ScenarioBuilder;
//!
//! let script = ScenarioBuilder::default()
//!     .build(&["schema.json", "revision", "appends:file1.csv"])
//!     .unwrap();
//!
//! assert!(script.contains("file,schema.json;"));
//! assert!(script.contains("{{revision1_url}}/appends"));
//! ```

pub mod builder;
pub mod operation;
pub mod render;

pub use builder::{Scenario, ScenarioBuilder};
pub use operation::{revision_url_var, ChangeKind, Operation, REVISION_TOKEN};
pub use render::{render_operation, render_run_comment};

/// Usage text printed when the generator gets too few arguments.
pub const USAGE: &str = "\
Let's say you have a bunch of CSV files you want to upload:

    file1.csv
    file2.csv
    file3.csv

And a schema file `schema.json`.

You can generate a hurl script like this:

    hurl-gen schema.json revision appends:file1.csv retractions:file2.csv revision corrections:file3.csv > bug-repro.hurl

The order is important: the schema file always comes first, followed by
`revision`. Every `revision` opens a new revision; every other argument
has the format `CHANGE_KIND:FILE_NAME`, where change kind is one of
appends, retractions, corrections, and is applied to the most recently
opened revision.

Hurl expects the file paths to be relative to the hurl script location.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;

    const SCENARIO: [&str; 6] = [
        "schema.json",
        "revision",
        "appends:file1.csv",
        "retractions:file2.csv",
        "revision",
        "corrections:file3.csv",
    ];

    /// Revision number of each `[Captures]` in emission order.
    fn captured_revisions(script: &str) -> Vec<String> {
        script
            .lines()
            .filter(|l| l.ends_with(": header \"Location\""))
            .map(|l| l.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_full_scenario_block_order() {
        let scenario = Scenario::parse(&SCENARIO).unwrap();
        let config = ScenarioConfig::default();
        let blocks = scenario.render_blocks(&config);

        assert_eq!(blocks.len(), 7);
        assert!(blocks[0].contains("file,schema.json;"));
        assert!(blocks[1].contains("revision1_url: header \"Location\""));
        assert!(blocks[2].contains("{{revision1_url}}/appends") && blocks[2].contains("file,file1.csv;"));
        assert!(blocks[3].contains("{{revision1_url}}/retractions") && blocks[3].contains("file,file2.csv;"));
        assert!(blocks[4].contains("revision2_url: header \"Location\""));
        assert!(blocks[5].contains("{{revision2_url}}/corrections") && blocks[5].contains("file,file3.csv;"));
        assert!(blocks[6].starts_with("# run: hurl"));

        assert_eq!(scenario.render(&config), blocks.join("\n\n"));
    }

    #[test]
    fn test_minimal_scenario_has_two_blocks_and_comment() {
        let blocks = Scenario::parse(&["schema.json", "revision"])
            .unwrap()
            .render_blocks(&ScenarioConfig::default());

        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("PUT "));
        assert!(blocks[1].contains("revision1_url"));
        assert!(blocks[2].starts_with('#'));
    }

    #[test]
    fn test_revisions_numbered_in_order() {
        let script = ScenarioBuilder::default()
            .build(&["s.json", "revision", "revision", "appends:a.csv", "revision"])
            .unwrap();

        assert_eq!(
            captured_revisions(&script),
            vec!["revision1_url", "revision2_url", "revision3_url"]
        );
    }

    #[test]
    fn test_changes_reference_nearest_capture() {
        let script = ScenarioBuilder::new(ScenarioConfig::local()).build(&SCENARIO).unwrap();

        let mut current: Option<String> = None;
        let mut checked = 0;
        for line in script.lines() {
            if let Some(var) = line.strip_suffix(": header \"Location\"") {
                current = Some(var.to_string());
            } else if line.starts_with("POST ") && line.contains("_url}}/") {
                let var = current.as_deref().unwrap();
                assert!(line.contains(&format!("{{{{{}}}}}/", var)), "{line} should target {var}");
                checked += 1;
            }
        }
        assert_eq!(checked, 3);
    }

    #[test]
    fn test_setup_is_first_and_contains_schema() {
        let script = ScenarioBuilder::default()
            .build(&["data/my schema.json", "revision"])
            .unwrap();
        let first_block = script.split("\n\n").next().unwrap();
        assert!(first_block.starts_with("PUT {{scheme}}://{{host_name}}/data/{{series}}"));
        assert!(script.contains("file,data/my schema.json;"));
    }

    #[test]
    fn test_error_produces_no_script() {
        let result = ScenarioBuilder::default().build(&["schema.json", "appends:file.csv"]);
        assert!(matches!(result, Err(crate::error::BuildError::Sequence { .. })));
    }
}
