//! Column rules for GUNC result tables.

use serde::{Deserialize, Serialize};

use super::record::TaxonomicLevel;

/// Name of the pass/fail column, spelled with a literal dot.
pub const PASS_COLUMN: &str = "pass.GUNC";

/// Name of the genome identifier column.
pub const GENOME_COLUMN: &str = "genome";

/// Check applied to every value of a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnCheck {
    /// Free-form identifier; only empty values are rejected.
    Identifier,
    /// Non-negative whole number.
    Count,
    /// Any floating-point number.
    Float,
    /// Floating-point number within [0, 1].
    Proportion,
    /// One of the seven taxonomic levels.
    TaxonomicLevel,
    /// Boolean pass/fail flag.
    Flag,
}

impl ColumnCheck {
    /// Check a single value, returning the reason on failure.
    ///
    /// Missing values are accepted for score and flag columns, GUNC writes
    /// `nan` when too few genes mapped to compute them.
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        let trimmed = value.trim();
        match self {
            ColumnCheck::Identifier => {
                if trimmed.is_empty() {
                    Err("empty identifier".to_string())
                } else {
                    Ok(())
                }
            }
            ColumnCheck::Count => trimmed
                .parse::<u64>()
                .map(|_| ())
                .map_err(|_| "expected a non-negative integer".to_string()),
            ColumnCheck::Float => {
                if is_missing(trimmed) {
                    return Ok(());
                }
                trimmed
                    .parse::<f64>()
                    .map(|_| ())
                    .map_err(|_| "expected a number".to_string())
            }
            ColumnCheck::Proportion => {
                if is_missing(trimmed) {
                    return Ok(());
                }
                let number = trimmed
                    .parse::<f64>()
                    .map_err(|_| "expected a number".to_string())?;
                if (0.0..=1.0).contains(&number) {
                    Ok(())
                } else {
                    Err("expected a value in [0, 1]".to_string())
                }
            }
            ColumnCheck::TaxonomicLevel => trimmed
                .parse::<TaxonomicLevel>()
                .map(|_| ()),
            ColumnCheck::Flag => {
                if is_missing(trimmed) || parse_flag(trimmed).is_some() {
                    Ok(())
                } else {
                    Err("expected a boolean".to_string())
                }
            }
        }
    }
}

/// A required column of a GUNC result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultColumn {
    pub name: &'static str,
    pub check: ColumnCheck,
}

const fn column(name: &'static str, check: ColumnCheck) -> ResultColumn {
    ResultColumn { name, check }
}

/// The thirteen columns every GUNC result table carries, in GUNC's order.
pub const RESULT_COLUMNS: [ResultColumn; 13] = [
    column(GENOME_COLUMN, ColumnCheck::Identifier),
    column("n_genes_called", ColumnCheck::Count),
    column("n_genes_mapped", ColumnCheck::Count),
    column("n_contigs", ColumnCheck::Count),
    column("taxonomic_level", ColumnCheck::TaxonomicLevel),
    column(
        "proportion_genes_retained_in_major_clades",
        ColumnCheck::Proportion,
    ),
    column("genes_retained_index", ColumnCheck::Float),
    column("clade_separation_score", ColumnCheck::Float),
    column("contamination_portion", ColumnCheck::Proportion),
    column("n_effective_surplus_clades", ColumnCheck::Float),
    column("mean_hit_identity", ColumnCheck::Proportion),
    column("reference_representation_score", ColumnCheck::Float),
    column(PASS_COLUMN, ColumnCheck::Flag),
];

/// Names of the required columns.
pub fn result_column_names() -> impl Iterator<Item = &'static str> {
    RESULT_COLUMNS.iter().map(|c| c.name)
}

/// Check if a value represents a missing/null value.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
}

/// Parse a pass/fail token as GUNC and pandas write them.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "pass" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "fail" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_column_names() {
        let names: Vec<&str> = result_column_names().collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "genome");
        assert_eq!(names[12], "pass.GUNC");
    }

    #[test]
    fn test_proportion_check() {
        assert!(ColumnCheck::Proportion.check("0.0").is_ok());
        assert!(ColumnCheck::Proportion.check("1").is_ok());
        assert!(ColumnCheck::Proportion.check("nan").is_ok());
        assert!(ColumnCheck::Proportion.check("1.01").is_err());
        assert!(ColumnCheck::Proportion.check("-0.2").is_err());
        assert!(ColumnCheck::Proportion.check("high").is_err());
    }

    #[test]
    fn test_count_check() {
        assert!(ColumnCheck::Count.check("2174").is_ok());
        assert!(ColumnCheck::Count.check("-1").is_err());
        assert!(ColumnCheck::Count.check("12.5").is_err());
        assert!(ColumnCheck::Count.check("").is_err());
    }

    #[test]
    fn test_flag_check() {
        assert!(ColumnCheck::Flag.check("True").is_ok());
        assert!(ColumnCheck::Flag.check("false").is_ok());
        assert!(ColumnCheck::Flag.check("").is_ok());
        assert!(ColumnCheck::Flag.check("maybe").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("pass"), Some(true));
        assert_eq!(parse_flag("nan"), None);
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(""));
        assert!(is_missing("nan"));
        assert!(is_missing("NaN"));
        assert!(is_missing(" NA "));
        assert!(!is_missing("0"));
        assert!(!is_missing("kingdom"));
    }
}
