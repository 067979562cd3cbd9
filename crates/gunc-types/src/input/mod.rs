//! Loading of tab-separated GUNC tables.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::DataTable;
