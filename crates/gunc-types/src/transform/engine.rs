//! Merges per-partition maxCSS summaries into one indexed table.

use tracing::debug;

use crate::error::{GuncError, Result};
use crate::format::{find_max_css, Format, GuncResultsDirectoryFormat};
use crate::input::{DataTable, Parser, ParserConfig};
use crate::schema::GENOME_COLUMN;
use crate::table::{Metadata, ResultsTable, SAMPLE_ID_COLUMN};

/// Engine turning a results directory into tabular views.
pub struct TransformEngine {
    parser: Parser,
}

impl TransformEngine {
    /// Create a new transform engine.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create an engine whose table loading uses a custom parser configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            parser: Parser::with_config(config),
        }
    }

    /// Load every partition's maxCSS summary into a single table.
    ///
    /// Partitions without a summary are skipped. Rows keep partition order,
    /// then file order, and are indexed by genome under the name `id`.
    /// Partitioned input gains a `sample_id` column.
    pub fn to_table(&self, format: &GuncResultsDirectoryFormat) -> Result<ResultsTable> {
        let mut tables: Vec<DataTable> = Vec::new();

        for (sample_id, dir) in format.file_dict()? {
            let Some(summary) = find_max_css(&dir)? else {
                debug!(sample = %sample_id, dir = %dir.display(), "no maxCSS summary, skipping partition");
                continue;
            };

            let mut table = self.parser.parse_file(&summary)?;
            if !sample_id.is_empty() {
                table.push_constant_column(SAMPLE_ID_COLUMN, &sample_id);
            }
            debug!(sample = %sample_id, rows = table.row_count(), "loaded maxCSS summary");
            tables.push(table);
        }

        if tables.is_empty() {
            return Err(GuncError::EmptyResult(format.path().to_path_buf()));
        }

        ResultsTable::concat(tables, GENOME_COLUMN)
    }

    /// Same rows as [`to_table`](Self::to_table), wrapped as metadata.
    pub fn to_metadata(&self, format: &GuncResultsDirectoryFormat) -> Result<Metadata> {
        self.to_table(format).map(|table| Metadata::from_table(&table))
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}
