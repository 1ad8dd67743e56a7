//! Fill the units column from the measurement type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{PrepError, PrepResult};
use crate::parser::{read_table_auto, write_table, Table};

/// Column holding the measurement type.
pub const MEASUREMENT_COLUMN: &str = "Measurement";

/// Column receiving the unit.
pub const UNITS_COLUMN: &str = "Units";

/// Measurement type → unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitMap(BTreeMap<String, String>);

impl Default for UnitMap {
    fn default() -> Self {
        let pairs = [
            ("IMD rank", "ordinal-position"),
            ("IMD score", "deprivation-score"),
            ("Rank", "ordinal-position"),
            ("Score", "deprivation-score"),
            ("Decile", "decile-group"),
            ("Decisions", "application-decisions"),
            ("Completions", "building-completions"),
        ];
        Self(
            pairs
                .into_iter()
                .map(|(m, u)| (m.to_string(), u.to_string()))
                .collect(),
        )
    }
}

impl UnitMap {
    /// Parse a JSON object of `"measurement": "unit"` pairs.
    pub fn from_json(json: &str) -> PrepResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a mapping file, replacing the defaults entirely.
    pub fn load(path: &Path) -> PrepResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn unit_for(&self, measurement: &str) -> Option<&str> {
        self.0.get(measurement).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Set `Units` on every row whose `Measurement` has a mapped unit.
///
/// Returns the number of rows updated. Unmapped rows are left as they are.
pub fn annotate_units(table: &mut Table, units: &UnitMap) -> PrepResult<usize> {
    let measurement_idx = table
        .column_index(MEASUREMENT_COLUMN)
        .ok_or_else(|| PrepError::MissingColumn(MEASUREMENT_COLUMN.to_string()))?;
    let units_idx = table
        .column_index(UNITS_COLUMN)
        .ok_or_else(|| PrepError::MissingColumn(UNITS_COLUMN.to_string()))?;

    let mut updated = 0;
    for row in &mut table.rows {
        let unit = match row.get(measurement_idx).and_then(|m| units.unit_for(m)) {
            Some(unit) => unit.to_string(),
            None => continue,
        };
        if row.len() <= units_idx {
            row.resize(units_idx + 1, String::new());
        }
        row[units_idx] = unit;
        updated += 1;
    }

    Ok(updated)
}

/// Rewrite `input` in place with units filled in.
///
/// The table is written to `<input>.tmp` first, then renamed over the input.
pub fn annotate_units_file(input: &Path, units: &UnitMap) -> PrepResult<usize> {
    let parsed = read_table_auto(input)?;
    let mut table = parsed.table;

    let updated = annotate_units(&mut table, units)?;

    let temp = super::path_with_appended(input, ".tmp");
    write_table(&temp, &table, parsed.delimiter)?;
    fs::rename(&temp, input)?;

    Ok(updated)
}
