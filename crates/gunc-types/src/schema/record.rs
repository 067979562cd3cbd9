//! Typed rows of a GUNC result table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::column::{is_missing, parse_flag};

/// Taxonomic level at which GUNC scored a genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomicLevel {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl TaxonomicLevel {
    /// All levels, from broadest to narrowest.
    pub const ALL: [TaxonomicLevel; 7] = [
        TaxonomicLevel::Kingdom,
        TaxonomicLevel::Phylum,
        TaxonomicLevel::Class,
        TaxonomicLevel::Order,
        TaxonomicLevel::Family,
        TaxonomicLevel::Genus,
        TaxonomicLevel::Species,
    ];

    /// The lowercase name GUNC writes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomicLevel::Kingdom => "kingdom",
            TaxonomicLevel::Phylum => "phylum",
            TaxonomicLevel::Class => "class",
            TaxonomicLevel::Order => "order",
            TaxonomicLevel::Family => "family",
            TaxonomicLevel::Genus => "genus",
            TaxonomicLevel::Species => "species",
        }
    }
}

impl fmt::Display for TaxonomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomicLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TaxonomicLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| "expected one of kingdom, phylum, class, order, family, genus, species".to_string())
    }
}

/// One row of a GUNC result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub genome: String,
    pub n_genes_called: u64,
    pub n_genes_mapped: u64,
    pub n_contigs: u64,
    pub taxonomic_level: TaxonomicLevel,
    #[serde(deserialize_with = "deserialize_score")]
    pub proportion_genes_retained_in_major_clades: Option<f64>,
    #[serde(deserialize_with = "deserialize_score")]
    pub genes_retained_index: Option<f64>,
    #[serde(deserialize_with = "deserialize_score")]
    pub clade_separation_score: Option<f64>,
    #[serde(deserialize_with = "deserialize_score")]
    pub contamination_portion: Option<f64>,
    #[serde(deserialize_with = "deserialize_score")]
    pub n_effective_surplus_clades: Option<f64>,
    #[serde(deserialize_with = "deserialize_score")]
    pub mean_hit_identity: Option<f64>,
    #[serde(deserialize_with = "deserialize_score")]
    pub reference_representation_score: Option<f64>,
    #[serde(rename = "pass.GUNC", deserialize_with = "deserialize_flag")]
    pub pass_gunc: Option<bool>,
}

impl ResultRecord {
    /// Whether GUNC flagged this genome as passing.
    pub fn passed(&self) -> bool {
        self.pass_gunc.unwrap_or(false)
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if is_missing(&s) => Ok(None),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number '{}'", s))),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if is_missing(&s) => Ok(None),
        Some(s) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid flag '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!("kingdom".parse::<TaxonomicLevel>(), Ok(TaxonomicLevel::Kingdom));
        assert_eq!("Species".parse::<TaxonomicLevel>(), Ok(TaxonomicLevel::Species));
        assert!("strain".parse::<TaxonomicLevel>().is_err());
    }

    #[test]
    fn test_level_order() {
        assert!(TaxonomicLevel::Kingdom < TaxonomicLevel::Species);
        assert_eq!(TaxonomicLevel::ALL.len(), 7);
    }

    #[test]
    fn test_deserialize_record_with_nan() {
        let data = "genome\tn_genes_called\tn_genes_mapped\tn_contigs\ttaxonomic_level\t\
                    proportion_genes_retained_in_major_clades\tgenes_retained_index\t\
                    clade_separation_score\tcontamination_portion\tn_effective_surplus_clades\t\
                    mean_hit_identity\treference_representation_score\tpass.GUNC\n\
                    mag1\t120\t4\t10\tgenus\tnan\tnan\tnan\tnan\tnan\tnan\tnan\tnan\n";
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(data.as_bytes());
        let record: ResultRecord = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(record.genome, "mag1");
        assert_eq!(record.taxonomic_level, TaxonomicLevel::Genus);
        assert_eq!(record.clade_separation_score, None);
        assert_eq!(record.pass_gunc, None);
        assert!(!record.passed());
    }
}
