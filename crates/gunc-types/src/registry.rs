//! Bindings between semantic types, formats and transformers.
//!
//! The table is built once on first use. Lookups go through
//! [`Registry::global`]; nothing is discovered at runtime.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{GuncError, Result};
use crate::format::{
    Format, GuncDatabaseDirFmt, GuncGeneCountsFormat, GuncHtmlPlotFormat,
    GuncResultsDirectoryFormat, GuncResultsFormat, ValidationLevel,
};
use crate::table::{Metadata, ResultsTable};
use crate::transform::TransformEngine;

/// Variants of the `ReferenceDB` semantic type provided here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceDbKind {
    GuncDb,
}

/// Semantic types this crate registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// `GUNCResults`
    GuncResults,
    /// `ReferenceDB[...]`
    ReferenceDb(ReferenceDbKind),
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::GuncResults => f.write_str("GUNCResults"),
            SemanticType::ReferenceDb(ReferenceDbKind::GuncDb) => f.write_str("ReferenceDB[GUNCDB]"),
        }
    }
}

impl FromStr for SemanticType {
    type Err = GuncError;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "GUNCResults" => Ok(SemanticType::GuncResults),
            "ReferenceDB[GUNCDB]" => Ok(SemanticType::ReferenceDb(ReferenceDbKind::GuncDb)),
            _ => Err(GuncError::UnknownSemanticType(s.to_string())),
        }
    }
}

/// Views a directory format can be transformed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// Raw indexed table.
    Table,
    /// Typed metadata wrapper.
    Metadata,
}

impl ViewType {
    pub fn name(&self) -> &'static str {
        match self {
            ViewType::Table => "DataFrame",
            ViewType::Metadata => "Metadata",
        }
    }
}

/// Output of a registered transformer.
#[derive(Debug, Clone)]
pub enum View {
    Table(ResultsTable),
    Metadata(Metadata),
}

impl View {
    pub fn into_table(self) -> Option<ResultsTable> {
        match self {
            View::Table(table) => Some(table),
            View::Metadata(_) => None,
        }
    }

    pub fn into_metadata(self) -> Option<Metadata> {
        match self {
            View::Metadata(metadata) => Some(metadata),
            View::Table(_) => None,
        }
    }
}

type ValidateFn = fn(&Path, ValidationLevel) -> Result<()>;
type TransformFn = fn(&Path) -> Result<View>;

fn validate_as<F: Format>(path: &Path, level: ValidationLevel) -> Result<()> {
    F::from_path(path).validate_level(level)
}

fn results_to_table(path: &Path) -> Result<View> {
    TransformEngine::new()
        .to_table(&GuncResultsDirectoryFormat::from_path(path))
        .map(View::Table)
}

fn results_to_metadata(path: &Path) -> Result<View> {
    TransformEngine::new()
        .to_metadata(&GuncResultsDirectoryFormat::from_path(path))
        .map(View::Metadata)
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Explicit format, semantic type and transformer table.
pub struct Registry {
    formats: IndexMap<&'static str, ValidateFn>,
    semantic_types: IndexMap<SemanticType, &'static str>,
    transformers: IndexMap<(&'static str, ViewType), TransformFn>,
}

impl Registry {
    /// Build the table of GUNC registrations.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: IndexMap::new(),
            semantic_types: IndexMap::new(),
            transformers: IndexMap::new(),
        };

        registry.register_format::<GuncResultsFormat>();
        registry.register_format::<GuncGeneCountsFormat>();
        registry.register_format::<GuncHtmlPlotFormat>();
        registry.register_format::<GuncResultsDirectoryFormat>();
        registry.register_format::<GuncDatabaseDirFmt>();

        registry
            .semantic_types
            .insert(SemanticType::GuncResults, GuncResultsDirectoryFormat::NAME);
        registry.semantic_types.insert(
            SemanticType::ReferenceDb(ReferenceDbKind::GuncDb),
            GuncDatabaseDirFmt::NAME,
        );

        registry
            .transformers
            .insert((GuncResultsDirectoryFormat::NAME, ViewType::Table), results_to_table);
        registry
            .transformers
            .insert((GuncResultsDirectoryFormat::NAME, ViewType::Metadata), results_to_metadata);

        registry
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    fn register_format<F: Format>(&mut self) {
        self.formats.insert(F::NAME, validate_as::<F>);
    }

    /// Registered format names.
    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Registered semantic types.
    pub fn semantic_types(&self) -> impl Iterator<Item = SemanticType> + '_ {
        self.semantic_types.keys().copied()
    }

    pub fn is_format_registered(&self, format: &str) -> bool {
        self.formats.contains_key(format)
    }

    /// Directory format bound to a semantic type.
    pub fn format_for(&self, semantic_type: SemanticType) -> Option<&'static str> {
        self.semantic_types.get(&semantic_type).copied()
    }

    pub fn has_transformer(&self, format: &str, view: ViewType) -> bool {
        self.transformers
            .keys()
            .any(|(name, v)| *name == format && *v == view)
    }

    /// Validate a path as a named format.
    pub fn validate_format(&self, format: &str, path: &Path, level: ValidationLevel) -> Result<()> {
        let validate = self
            .formats
            .get(format)
            .ok_or_else(|| GuncError::UnknownFormat(format.to_string()))?;
        validate(path, level)
    }

    /// Validate a path as the format bound to a semantic type.
    pub fn validate(&self, semantic_type: SemanticType, path: &Path, level: ValidationLevel) -> Result<()> {
        let format = self
            .format_for(semantic_type)
            .ok_or_else(|| GuncError::UnknownSemanticType(semantic_type.to_string()))?;
        self.validate_format(format, path, level)
    }

    /// Transform a path of a registered format into a view.
    pub fn view(&self, format: &'static str, path: &Path, view: ViewType) -> Result<View> {
        let transform = self
            .transformers
            .get(&(format, view))
            .ok_or(GuncError::UnregisteredTransformer {
                format,
                view: view.name(),
            })?;
        transform(path)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_type_round_trip() {
        for semantic_type in Registry::global().semantic_types() {
            let parsed: SemanticType = semantic_type.to_string().parse().unwrap();
            assert_eq!(parsed, semantic_type);
        }
        assert_eq!(
            "ReferenceDB[ GUNCDB ]".parse::<SemanticType>().unwrap(),
            SemanticType::ReferenceDb(ReferenceDbKind::GuncDb)
        );
        assert!("FeatureData[MAG]".parse::<SemanticType>().is_err());
    }

    #[test]
    fn test_semantic_type_to_format() {
        let registry = Registry::global();
        assert_eq!(
            registry.format_for(SemanticType::GuncResults),
            Some("GUNCResultsDirectoryFormat")
        );
        assert_eq!(
            registry.format_for(SemanticType::ReferenceDb(ReferenceDbKind::GuncDb)),
            Some("GUNCDatabaseDirFmt")
        );
    }

    #[test]
    fn test_transformers_registered() {
        let registry = Registry::global();
        assert!(registry.has_transformer("GUNCResultsDirectoryFormat", ViewType::Table));
        assert!(registry.has_transformer("GUNCResultsDirectoryFormat", ViewType::Metadata));
        assert!(!registry.has_transformer("GUNCDatabaseDirFmt", ViewType::Table));
    }

    #[test]
    fn test_formats_registered() {
        let registry = Registry::global();
        for name in [
            "GUNCResultsFormat",
            "GUNCGeneCountsFormat",
            "GUNCHTMLPlotFormat",
            "GUNCResultsDirectoryFormat",
            "GUNCDatabaseDirFmt",
        ] {
            assert!(registry.is_format_registered(name), "{name} not registered");
        }
    }

    #[test]
    fn test_unregistered_view() {
        let err = Registry::global()
            .view(GuncDatabaseDirFmt::NAME, Path::new("/tmp"), ViewType::Metadata)
            .unwrap_err();
        assert!(matches!(err, GuncError::UnregisteredTransformer { .. }));
    }
}
