//! TSV parser for GUNC tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::trace;

use crate::error::{GuncError, Result};
use super::source::DataTable;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            max_rows: None,
            quote: b'"',
        }
    }
}

impl ParserConfig {
    /// Limit the number of data rows read.
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }
}

/// Parses tab-separated GUNC tables. The first row is always the header.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file into a data table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<DataTable> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| GuncError::io(path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| GuncError::io(path, e))?;

        let table = self.parse_bytes(&contents, path)?;
        trace!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed table"
        );
        Ok(table)
    }

    /// Parse bytes directly.
    ///
    /// Short rows are padded with empty cells. A row with more fields than
    /// the header is rejected.
    fn parse_bytes(&self, bytes: &[u8], path: &Path) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.trim().to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(self.invalid(path, "no header row".to_string()));
        }

        let mut rows = Vec::new();
        let expected_cols = headers.len();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if record.len() > expected_cols {
                return Err(self.invalid(
                    path,
                    format!(
                        "row {} has {} fields, header has {}",
                        row_idx + 1,
                        record.len(),
                        expected_cols
                    ),
                ));
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            row.resize(expected_cols, String::new());
            rows.push(row);
        }

        Ok(DataTable::new(headers, rows, path))
    }

    fn invalid(&self, path: &Path, message: String) -> GuncError {
        GuncError::InvalidContent {
            path: path.to_path_buf(),
            format: "tab-separated table",
            message,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv() {
        let parser = Parser::new();
        let data = b"genome\tn_contigs\nmag1\t10\nmag2\t25";
        let table = parser.parse_bytes(data, Path::new("x.tsv")).unwrap();

        assert_eq!(table.headers, vec!["genome", "n_contigs"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("mag1"));
        assert_eq!(table.get(1, 1), Some("25"));
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let data = b"a\tb\tc\n1\t2\n";
        let table = parser.parse_bytes(data, Path::new("x.tsv")).unwrap();

        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_parse_rejects_overlong_rows() {
        let parser = Parser::new();
        let data = b"a\tb\n1\t2\n3\t4\textra\n";
        let err = parser.parse_bytes(data, Path::new("x.tsv")).unwrap_err();

        match err {
            GuncError::InvalidContent { message, .. } => assert!(message.starts_with("row 2 "), "{message}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_max_rows() {
        let parser = Parser::with_config(ParserConfig::default().with_max_rows(Some(1)));
        let data = b"a\n1\n2\n3\n";
        let table = parser.parse_bytes(data, Path::new("x.tsv")).unwrap();

        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_parse_header_only() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"a\tb\n", Path::new("x.tsv")).unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_empty_file() {
        let parser = Parser::new();
        let err = parser.parse_bytes(b"", Path::new("x.tsv")).unwrap_err();

        assert!(matches!(err, GuncError::InvalidContent { .. }));
    }
}
