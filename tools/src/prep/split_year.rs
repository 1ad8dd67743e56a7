//! Move the rows of one year out into their own file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrepError, PrepResult};
use crate::parser::{read_table_auto, write_table, Table};

/// Column holding the period, by position.
pub const DEFAULT_YEAR_COLUMN: usize = 1;

/// Rows split by year, both with the original header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSplit {
    pub matching: Table,
    pub remaining: Table,
}

/// Split rows on whether cell `column` contains `year`.
///
/// Rows too short to have the column stay in `remaining`.
pub fn split_by_year(table: &Table, year: &str, column: usize) -> PrepResult<YearSplit> {
    if column >= table.headers.len() {
        return Err(PrepError::ColumnOutOfRange {
            index: column,
            width: table.headers.len(),
        });
    }

    let (matching, remaining): (Vec<_>, Vec<_>) = table
        .rows
        .iter()
        .cloned()
        .partition(|row| row.get(column).is_some_and(|cell| cell.contains(year)));

    Ok(YearSplit {
        matching: Table::new(table.headers.clone(), matching),
        remaining: Table::new(table.headers.clone(), remaining),
    })
}

/// Write matching rows to `<input stem>-<year>.csv` and rewrite `input`
/// with the rest, through `<input>.tmp` and a rename.
pub fn split_year_file(input: &Path, year: &str, column: usize) -> PrepResult<(PathBuf, YearSplit)> {
    let parsed = read_table_auto(input)?;

    let split = split_by_year(&parsed.table, year, column)?;

    let output = super::sibling_with_suffix(input, &format!("-{}", year));
    write_table(&output, &split.matching, parsed.delimiter)?;

    let temp = super::path_with_appended(input, ".tmp");
    write_table(&temp, &split.remaining, parsed.delimiter)?;
    fs::rename(&temp, input)?;

    Ok((output, split))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["Area".into(), "Period".into(), "Value".into()],
            vec![
                vec!["Leeds".into(), "2021-22".into(), "1".into()],
                vec!["York".into(), "2022-23".into(), "2".into()],
                vec!["Hull".into(), "2023".into(), "3".into()],
                vec!["Short".into()],
            ],
        )
    }

    #[test]
    fn test_substring_match() {
        let split = split_by_year(&sample(), "2022", DEFAULT_YEAR_COLUMN).unwrap();

        assert_eq!(split.matching.len(), 2);
        assert_eq!(split.matching.rows[0][0], "Leeds");
        assert_eq!(split.matching.rows[1][0], "York");
        assert_eq!(split.remaining.len(), 2);
        assert_eq!(split.remaining.rows[1], vec!["Short"]);
        assert_eq!(split.matching.headers, split.remaining.headers);
    }

    #[test]
    fn test_column_out_of_range() {
        let err = split_by_year(&sample(), "2022", 3).unwrap_err();
        assert!(matches!(err, PrepError::ColumnOutOfRange { index: 3, width: 3 }));
    }

    #[test]
    fn test_file_split_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("decisions.csv");
        std::fs::write(&input, "Area,Period,Value\nLeeds,2022,1\nYork,2023,2\n").unwrap();

        let (output, split) = split_year_file(&input, "2022", DEFAULT_YEAR_COLUMN).unwrap();

        assert_eq!(output, dir.path().join("decisions-2022.csv"));
        assert_eq!(split.matching.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Area,Period,Value\nLeeds,2022,1\n"
        );
        assert_eq!(
            std::fs::read_to_string(&input).unwrap(),
            "Area,Period,Value\nYork,2023,2\n"
        );
        assert!(!dir.path().join("decisions.csv.tmp").exists());
    }

    #[test]
    fn test_failed_split_leaves_input_intact() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("decisions.csv");
        std::fs::write(&input, "Area,Period,Value\nLeeds,2022,1\n").unwrap();
        // A directory squatting on the temp path makes the rewrite fail
        std::fs::create_dir(dir.path().join("decisions.csv.tmp")).unwrap();

        assert!(split_year_file(&input, "2022", DEFAULT_YEAR_COLUMN).is_err());
        assert_eq!(
            std::fs::read_to_string(&input).unwrap(),
            "Area,Period,Value\nLeeds,2022,1\n"
        );
    }
}
