//! Append a column of random integers.

use rand::Rng;
use std::path::{Path, PathBuf};

use crate::error::PrepResult;
use crate::parser::{read_table_auto, write_table, Table};

/// Header of the appended column.
pub const DUMMY_COLUMN: &str = "DummyColumn";

/// Inclusive upper bound of the random values.
pub const DUMMY_MAX: u32 = 1000;

/// Append [`DUMMY_COLUMN`] with a value in `0..=1000` on every row.
pub fn add_dummy_column<R: Rng>(table: &mut Table, rng: &mut R) {
    table.headers.push(DUMMY_COLUMN.to_string());
    for row in &mut table.rows {
        row.push(rng.random_range(0..=DUMMY_MAX).to_string());
    }
}

/// Write `<input stem>-dummy-column.csv` next to `input`.
pub fn add_dummy_column_file<R: Rng>(input: &Path, rng: &mut R) -> PrepResult<PathBuf> {
    let parsed = read_table_auto(input)?;
    let mut table = parsed.table;

    add_dummy_column(&mut table, rng);

    let output = super::sibling_with_suffix(input, "-dummy-column");
    write_table(&output, &table, parsed.delimiter)?;
    Ok(output)
}
