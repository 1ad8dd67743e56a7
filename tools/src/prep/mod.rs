//! CSV data-preparation utilities.
//!
//! Each utility has a pure function over a [`Table`](crate::parser::Table)
//! and a file-level wrapper that reads the input with auto-detection and
//! writes its result next to it:
//! - `dummy_column`: Append a random integer column
//! - `units`: Fill the units column from the measurement type
//! - `dedup`: Drop rows duplicated in every column but one
//! - `split_year`: Move rows of one year to their own file

pub mod dedup;
pub mod dummy_column;
pub mod split_year;
pub mod units;

pub use dedup::{filter_duplicates, filter_duplicates_file, DedupReport, DEFAULT_IGNORED_COLUMN};
pub use dummy_column::{add_dummy_column, add_dummy_column_file, DUMMY_COLUMN};
pub use split_year::{split_by_year, split_year_file, YearSplit, DEFAULT_YEAR_COLUMN};
pub use units::{annotate_units, annotate_units_file, UnitMap, MEASUREMENT_COLUMN, UNITS_COLUMN};

use std::path::{Path, PathBuf};

/// `dir/name.csv` → `dir/name<suffix>.csv`
pub(crate) fn sibling_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.csv", stem, suffix))
}

/// `dir/name.csv` → `dir/name.csv<suffix>`
pub(crate) fn path_with_appended(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_with_suffix() {
        assert_eq!(
            sibling_with_suffix(Path::new("data/input.csv"), "-2022"),
            PathBuf::from("data/input-2022.csv")
        );
        assert_eq!(
            sibling_with_suffix(Path::new("input"), "-dummy-column"),
            PathBuf::from("input-dummy-column.csv")
        );
    }

    #[test]
    fn test_path_with_appended() {
        assert_eq!(
            path_with_appended(Path::new("data/input.csv"), "-filtered.csv"),
            PathBuf::from("data/input.csv-filtered.csv")
        );
    }
}
