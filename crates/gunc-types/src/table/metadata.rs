//! Typed metadata view over a results table.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::schema::{is_missing, ColumnType};

use super::results::ResultsTable;

/// A single typed metadata value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
    Missing,
}

/// One column of metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataColumn {
    #[serde(rename = "type")]
    column_type: ColumnType,
    values: Vec<String>,
}

impl MetadataColumn {
    fn new(values: Vec<String>) -> Self {
        let column_type = ColumnType::infer(values.iter().map(String::as_str));
        Self { column_type, values }
    }

    /// Inferred column type.
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Typed value at a row.
    pub fn value(&self, row: usize) -> Option<MetadataValue> {
        let raw = self.values.get(row)?;
        Some(if is_missing(raw) {
            MetadataValue::Missing
        } else if self.column_type.is_numeric() {
            raw.trim()
                .parse::<f64>()
                .map(MetadataValue::Number)
                .unwrap_or(MetadataValue::Missing)
        } else {
            MetadataValue::Text(raw.clone())
        })
    }

    /// Values as written in the source table.
    pub fn raw_values(&self) -> &[String] {
        &self.values
    }
}

/// Sample/feature metadata: identifiers plus typed columns.
///
/// Identifiers are genome ids and repeat across taxonomic levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    id_header: String,
    ids: Vec<String>,
    columns: IndexMap<String, MetadataColumn>,
}

impl Metadata {
    /// Wrap a results table, inferring a type per column.
    pub fn from_table(table: &ResultsTable) -> Self {
        let mut columns = IndexMap::with_capacity(table.column_count());
        for (i, name) in table.columns().iter().enumerate() {
            let values = table.rows().iter().map(|r| r[i].clone()).collect();
            columns.insert(name.clone(), MetadataColumn::new(values));
        }
        Self {
            id_header: table.index_name().to_string(),
            ids: table.index().to_vec(),
            columns,
        }
    }

    /// Name of the identifier column.
    pub fn id_header(&self) -> &str {
        &self.id_header
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn id_count(&self) -> usize {
        self.ids.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&MetadataColumn> {
        self.columns.get(name)
    }

    /// Columns of a given type.
    pub fn columns_of_type(&self, column_type: ColumnType) -> impl Iterator<Item = (&str, &MetadataColumn)> {
        self.columns
            .iter()
            .filter(move |(_, c)| c.column_type == column_type)
            .map(|(n, c)| (n.as_str(), c))
    }

    /// Convert back to the tabular view.
    pub fn to_table(&self) -> ResultsTable {
        let headers: Vec<String> = self.columns.keys().cloned().collect();
        let rows = (0..self.ids.len())
            .map(|row| {
                self.columns
                    .values()
                    .map(|c| c.values[row].clone())
                    .collect()
            })
            .collect();
        ResultsTable::from_parts(self.id_header.clone(), self.ids.clone(), headers, rows)
    }

    /// Write as a metadata TSV with a `#q2:types` directive row.
    pub fn to_tsv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);

        let mut header = vec![self.id_header.as_str()];
        header.extend(self.column_names());
        writer.write_record(&header)?;

        let mut types = vec!["#q2:types"];
        types.extend(self.columns.values().map(|c| c.column_type.directive()));
        writer.write_record(&types)?;

        for (row, id) in self.ids.iter().enumerate() {
            let mut record = vec![id.as_str()];
            record.extend(self.columns.values().map(|c| c.values[row].as_str()));
            writer.write_record(&record)?;
        }

        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

impl From<&ResultsTable> for Metadata {
    fn from(table: &ResultsTable) -> Self {
        Metadata::from_table(table)
    }
}
