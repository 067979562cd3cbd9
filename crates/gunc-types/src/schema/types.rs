//! Column types of the metadata view.

use serde::{Deserialize, Serialize};

use super::column::is_missing;

/// Type of a metadata column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Every non-missing value is a number.
    Numeric,
    /// Anything else.
    Categorical,
}

impl ColumnType {
    /// Infer the type of a column from its values.
    ///
    /// A column with no values at all is categorical.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen = false;
        for value in values {
            if is_missing(value) {
                continue;
            }
            if value.trim().parse::<f64>().is_err() {
                return ColumnType::Categorical;
            }
            seen = true;
        }
        if seen {
            ColumnType::Numeric
        } else {
            ColumnType::Categorical
        }
    }

    /// Name used in `#q2:types` directives.
    pub fn directive(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
        }
    }

    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_numeric() {
        assert_eq!(ColumnType::infer(["1", "2.5", "nan"]), ColumnType::Numeric);
    }

    #[test]
    fn test_infer_categorical() {
        assert_eq!(ColumnType::infer(["True", "False"]), ColumnType::Categorical);
        assert_eq!(ColumnType::infer(["kingdom", "1"]), ColumnType::Categorical);
    }

    #[test]
    fn test_infer_all_missing() {
        assert_eq!(ColumnType::infer(["", "nan"]), ColumnType::Categorical);
    }
}
