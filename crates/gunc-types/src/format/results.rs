//! Validator for GUNC result tables (`*.all_levels.tsv`, `GUNC.*.maxCSS_level.tsv`).

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{GuncError, Result};
use crate::input::{DataTable, Parser, ParserConfig};
use crate::schema::RESULT_COLUMNS;

use super::{ensure_file, Format, ValidationLevel};

/// A tab-separated GUNC result table.
#[derive(Debug, Clone)]
pub struct GuncResultsFormat {
    path: PathBuf,
}

impl GuncResultsFormat {
    /// Load the table without validating it.
    pub fn load(&self) -> Result<DataTable> {
        Parser::new().parse_file(&self.path)
    }
}

impl Format for GuncResultsFormat {
    const NAME: &'static str = "GUNCResultsFormat";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, level: ValidationLevel) -> Result<()> {
        ensure_file(&self.path)?;

        let parser = Parser::with_config(ParserConfig::default().with_max_rows(level.row_limit()));
        let table = parser.parse_file(&self.path)?;
        check_table(&table)?;

        trace!(path = %self.path.display(), rows = table.row_count(), "validated GUNC results");
        Ok(())
    }
}

/// Check a loaded table against the required columns and their value rules.
pub(crate) fn check_table(table: &DataTable) -> Result<()> {
    let mut positions = Vec::with_capacity(RESULT_COLUMNS.len());
    for column in &RESULT_COLUMNS {
        let index = table
            .column_index(column.name)
            .ok_or_else(|| GuncError::MissingColumn {
                path: table.source().to_path_buf(),
                column: column.name.to_string(),
            })?;
        positions.push((column, index));
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (column, index) in &positions {
            let value = row.get(*index).map(String::as_str).unwrap_or("");
            column
                .check
                .check(value)
                .map_err(|reason| GuncError::InvalidValue {
                    path: table.source().to_path_buf(),
                    row: row_idx + 1,
                    column: column.name.to_string(),
                    value: value.to_string(),
                    reason,
                })?;
        }
    }

    Ok(())
}
