//! Formats, validators and transformers for GUNC genome quality results.
//!
//! GUNC scores metagenome-assembled genomes for chimerism and contamination.
//! This crate does not run GUNC; it checks the files GUNC writes and turns a
//! results directory into a table.
//!
//! # Formats
//!
//! - [`GuncResultsFormat`]: per-genome and maxCSS result tables (TSV)
//! - [`GuncGeneCountsFormat`]: gene counts per genome (JSON)
//! - [`GuncHtmlPlotFormat`]: interactive plots (HTML, leniently parsed)
//! - [`GuncResultsDirectoryFormat`]: a full results directory, optionally
//!   partitioned by sample
//! - [`GuncDatabaseDirFmt`]: the DIAMOND reference database
//!
//! # Example
//!
//! ```no_run
//! use gunc_types::{Format, GuncResultsDirectoryFormat, TransformEngine};
//!
//! let results = GuncResultsDirectoryFormat::from_path("gunc-results");
//! results.validate().unwrap();
//!
//! let table = TransformEngine::new().to_table(&results).unwrap();
//! println!("{} rows indexed by '{}'", table.row_count(), table.index_name());
//! ```

pub mod error;
pub mod format;
pub mod input;
pub mod registry;
pub mod schema;
pub mod table;
pub mod transform;

mod collate;

pub use collate::collate_results;
pub use error::{ErrorKind, GuncError, Result};
pub use format::{
    DiamondOutputFormat, Format, GeneCallsFastaFormat, GuncDatabaseDirFmt, GuncGeneCountsFormat,
    GuncHtmlPlotFormat, GuncResultsDirectoryFormat, GuncResultsFormat, Layout, ValidationLevel,
};
pub use input::{DataTable, Parser, ParserConfig};
pub use registry::{ReferenceDbKind, Registry, SemanticType, View, ViewType};
pub use schema::{ColumnType, ResultRecord, TaxonomicLevel};
pub use table::{Metadata, MetadataColumn, MetadataValue, ResultsTable};
pub use transform::{gunc_results_to_metadata, gunc_results_to_table, TransformEngine};
