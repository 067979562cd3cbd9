//! Schema of GUNC result tables.

mod column;
mod record;
mod types;

pub use column::{
    ColumnCheck, GENOME_COLUMN, PASS_COLUMN, RESULT_COLUMNS, ResultColumn, is_missing,
    parse_flag, result_column_names,
};
pub use record::{ResultRecord, TaxonomicLevel};
pub use types::ColumnType;
