//! Merged result tables and their metadata view.

mod metadata;
mod results;

pub use metadata::{Metadata, MetadataColumn, MetadataValue};
pub use results::{INDEX_NAME, ResultsTable, SAMPLE_ID_COLUMN};
