//! Transformers from GUNC directory formats to tabular views.

mod engine;

pub use engine::TransformEngine;

use crate::error::Result;
use crate::format::GuncResultsDirectoryFormat;
use crate::table::{Metadata, ResultsTable};

/// Merge a results directory into a table with the default engine.
pub fn gunc_results_to_table(format: &GuncResultsDirectoryFormat) -> Result<ResultsTable> {
    TransformEngine::new().to_table(format)
}

/// Merge a results directory into a metadata view with the default engine.
pub fn gunc_results_to_metadata(format: &GuncResultsDirectoryFormat) -> Result<Metadata> {
    TransformEngine::new().to_metadata(format)
}
