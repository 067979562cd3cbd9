//! A table of GUNC results indexed by genome.

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::{GuncError, Result};
use crate::input::DataTable;
use crate::schema::{ResultRecord, GENOME_COLUMN};

/// Name given to the genome index.
pub const INDEX_NAME: &str = "id";

/// Column added to rows of partitioned results.
pub const SAMPLE_ID_COLUMN: &str = "sample_id";

/// Rows of one or more GUNC tables under a shared, non-unique index.
///
/// The index repeats a genome once per taxonomic level; the rows stay
/// distinct through their `taxonomic_level` column. The column the index was
/// built from is not kept among the data columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsTable {
    index_name: String,
    index: Vec<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultsTable {
    /// Concatenate tables in order and index the result by `index_column`.
    ///
    /// Columns are the union of all headers in first-seen order, minus
    /// `index_column`; cells a table does not have are left empty.
    pub fn concat(tables: Vec<DataTable>, index_column: &str) -> Result<Self> {
        let mut headers: IndexSet<String> = IndexSet::new();
        for table in &tables {
            headers.extend(
                table
                    .headers
                    .iter()
                    .filter(|h| h.as_str() != index_column)
                    .cloned(),
            );
        }

        let row_count = tables.iter().map(DataTable::row_count).sum();
        let mut index = Vec::with_capacity(row_count);
        let mut rows = Vec::with_capacity(row_count);

        for table in tables {
            let key = table
                .column_index(index_column)
                .ok_or_else(|| GuncError::MissingColumn {
                    path: table.source().to_path_buf(),
                    column: index_column.to_string(),
                })?;
            let positions: Vec<Option<usize>> = headers
                .iter()
                .map(|h| table.column_index(h))
                .collect();

            for row in table.rows {
                index.push(row.get(key).cloned().unwrap_or_default());
                rows.push(
                    positions
                        .iter()
                        .map(|p| p.and_then(|i| row.get(i).cloned()).unwrap_or_default())
                        .collect(),
                );
            }
        }

        Ok(Self {
            index_name: INDEX_NAME.to_string(),
            index,
            headers: headers.into_iter().collect(),
            rows,
        })
    }

    /// Build a table from parts. Every row must have one cell per header.
    pub(crate) fn from_parts(
        index_name: String,
        index: Vec<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            index_name,
            index,
            headers,
            rows,
        }
    }

    /// Name of the index.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Index values, one per row.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Column names.
    pub fn columns(&self) -> &[String] {
        &self.headers
    }

    /// Raw rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column is present.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|r| r[index].as_str()).collect())
    }

    /// Distinct values of a column, in order of first appearance.
    pub fn unique_values(&self, name: &str) -> Option<Vec<&str>> {
        let values: IndexSet<&str> = self.column(name)?.into_iter().collect();
        Some(values.into_iter().collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row).map(|r| r[index].as_str())
    }

    /// Deserialize every row into a [`ResultRecord`].
    ///
    /// The index value fills the record's `genome` field.
    pub fn records(&self) -> Result<Vec<ResultRecord>> {
        let mut headers = csv::StringRecord::from(vec![GENOME_COLUMN]);
        headers.extend(self.headers.iter());
        self.rows
            .iter()
            .zip(&self.index)
            .map(|(row, genome)| {
                let mut record = csv::StringRecord::from(vec![genome.as_str()]);
                record.extend(row.iter());
                record.deserialize(Some(&headers)).map_err(GuncError::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            "t.tsv",
        )
    }

    #[test]
    fn test_concat_preserves_order() {
        let a = table(&["genome", "n_contigs"], &[&["mag1", "10"], &["mag1", "10"]]);
        let b = table(&["genome", "n_contigs"], &[&["mag2", "4"]]);
        let merged = ResultsTable::concat(vec![a, b], "genome").unwrap();

        assert_eq!(merged.index_name(), "id");
        assert_eq!(merged.index(), &["mag1", "mag1", "mag2"]);
        assert_eq!(merged.row_count(), 3);
        assert_eq!(merged.get(2, "n_contigs"), Some("4"));
        assert!(!merged.has_column("genome"));
        assert_eq!(merged.columns(), &["n_contigs"]);
    }

    #[test]
    fn test_concat_aligns_columns() {
        let a = table(&["genome", "n_contigs"], &[&["mag1", "10"]]);
        let b = table(&["genome", "sample_id"], &[&["mag2", "s1"]]);
        let merged = ResultsTable::concat(vec![a, b], "genome").unwrap();

        assert_eq!(merged.columns(), &["n_contigs", "sample_id"]);
        assert_eq!(merged.get(0, "sample_id"), Some(""));
        assert_eq!(merged.get(1, "n_contigs"), Some(""));
    }

    #[test]
    fn test_concat_missing_index_column() {
        let a = table(&["name"], &[&["mag1"]]);
        let err = ResultsTable::concat(vec![a], "genome").unwrap_err();
        assert!(matches!(err, GuncError::MissingColumn { .. }));
    }

    #[test]
    fn test_unique_values() {
        let a = table(&["genome", "sample_id"], &[&["m1", "s2"], &["m2", "s1"], &["m3", "s2"]]);
        let merged = ResultsTable::concat(vec![a], "genome").unwrap();

        assert_eq!(merged.unique_values("sample_id"), Some(vec!["s2", "s1"]));
        assert_eq!(merged.unique_values("missing"), None);
    }

    #[test]
    fn test_records_take_genome_from_index() {
        let header = [
            "genome", "n_genes_called", "n_genes_mapped", "n_contigs", "taxonomic_level",
            "proportion_genes_retained_in_major_clades", "genes_retained_index",
            "clade_separation_score", "contamination_portion", "n_effective_surplus_clades",
            "mean_hit_identity", "reference_representation_score", "pass.GUNC",
        ];
        let row = [
            "mag1", "2174", "2040", "77", "species", "0.99", "0.93", "nan", "0.01", "1.02",
            "0.96", "0.93", "True",
        ];
        let merged = ResultsTable::concat(vec![table(&header, &[&row])], "genome").unwrap();

        let records = merged.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].genome, "mag1");
        assert_eq!(records[0].clade_separation_score, None);
        assert!(records[0].passed());
    }
}
