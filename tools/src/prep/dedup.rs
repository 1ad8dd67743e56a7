//! Drop rows that repeat an earlier row in every column but one.
//!
//! Typically the measure column (`Value`) is ignored, so two observations
//! with the same dimensions but different values count as duplicates and
//! only the first is kept.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::PrepResult;
use crate::parser::{read_table_auto, write_table, Table};

/// Column ignored when none is given.
pub const DEFAULT_IGNORED_COLUMN: &str = "Value";

/// Outcome of a duplicate filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupReport {
    /// Data rows before filtering
    pub original_count: usize,
    /// Rows dropped, in input order
    pub duplicates: Vec<Vec<String>>,
    /// Rows kept, with the original header
    pub kept: Table,
}

impl DedupReport {
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    pub fn final_count(&self) -> usize {
        self.kept.len()
    }
}

/// Keep the first of each group of rows equal outside `ignored_column`.
///
/// When `ignored_column` is not in the header every column is compared.
pub fn filter_duplicates(table: &Table, ignored_column: &str) -> DedupReport {
    let ignored = table.column_index(ignored_column);

    let mut seen: HashSet<Vec<&str>> = HashSet::new();
    let mut kept = Vec::new();
    let mut duplicates = Vec::new();

    for row in &table.rows {
        let key: Vec<&str> = (0..table.headers.len().max(row.len()))
            .filter(|&i| Some(i) != ignored)
            .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
            .collect();

        if seen.insert(key) {
            kept.push(row.clone());
        } else {
            duplicates.push(row.clone());
        }
    }

    DedupReport {
        original_count: table.len(),
        duplicates,
        kept: Table::new(table.headers.clone(), kept),
    }
}

/// Write the kept rows to `<input>-filtered.csv`.
pub fn filter_duplicates_file(input: &Path, ignored_column: &str) -> PrepResult<(PathBuf, DedupReport)> {
    let parsed = read_table_auto(input)?;

    let report = filter_duplicates(&parsed.table, ignored_column);

    let output = super::path_with_appended(input, "-filtered.csv");
    write_table(&output, &report.kept, parsed.delimiter)?;
    Ok((output, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_ignores_value_column() {
        let t = table(
            &["Area", "Period", "Value"],
            &[
                &["Leeds", "2021", "3"],
                &["Leeds", "2021", "4"],
                &["Leeds", "2022", "3"],
                &["Leeds", "2021", "3"],
            ],
        );

        let report = filter_duplicates(&t, "Value");

        assert_eq!(report.original_count, 4);
        assert_eq!(report.duplicate_count(), 2);
        assert_eq!(report.final_count(), 2);
        assert_eq!(report.kept.rows[0], vec!["Leeds", "2021", "3"]);
        assert_eq!(report.kept.rows[1], vec!["Leeds", "2022", "3"]);
        assert_eq!(report.duplicates[0], vec!["Leeds", "2021", "4"]);
    }

    #[test]
    fn test_missing_ignored_column_compares_all() {
        let t = table(
            &["Area", "Count"],
            &[&["Leeds", "3"], &["Leeds", "4"], &["Leeds", "3"]],
        );

        let report = filter_duplicates(&t, "Value");

        assert_eq!(report.final_count(), 2);
        assert_eq!(report.duplicates, vec![vec!["Leeds", "3"]]);
    }

    #[test]
    fn test_short_rows_match_padded() {
        let t = table(&["Area", "Note", "Value"], &[&["Leeds", ""], &["Leeds", "", "7"]]);

        let report = filter_duplicates(&t, "Value");
        assert_eq!(report.duplicate_count(), 1);
    }

    #[test]
    fn test_file_output_appends_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("planning.csv");
        std::fs::write(&input, "Area,Value\nLeeds,1\nLeeds,2\nYork,1\n").unwrap();

        let (output, report) = filter_duplicates_file(&input, DEFAULT_IGNORED_COLUMN).unwrap();

        assert_eq!(output, dir.path().join("planning.csv-filtered.csv"));
        assert_eq!(report.duplicate_count(), 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Area,Value\nLeeds,1\nYork,1\n"
        );
    }
}
