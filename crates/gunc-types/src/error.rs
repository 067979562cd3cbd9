//! Error types for GUNC format validation and transformation.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`GuncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An expected file or directory is missing, or the layout is ambiguous.
    Structural,
    /// A file exists but its content violates the expected schema.
    Schema,
    /// The transformer found no partition with a result table.
    EmptyResult,
    /// The filesystem could not be read.
    Io,
}

/// Main error type for GUNC format operations.
#[derive(Debug, Error)]
pub enum GuncError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required file or directory was not found.
    #[error("Missing {what} in '{dir}'")]
    MissingEntry { dir: PathBuf, what: String },

    /// More files matched a pattern than the layout allows.
    #[error("Expected a single {what} in '{dir}', found {count}")]
    AmbiguousEntry {
        dir: PathBuf,
        what: String,
        count: usize,
    },

    /// The directory mixes per-sample sub-directories with a flat result set.
    #[error("Mixed layout in '{dir}': found both result files and sample directories ({samples})")]
    MixedLayout { dir: PathBuf, samples: String },

    /// The directory matches neither the flat nor the per-sample layout.
    #[error("No GUNC results found in '{0}'")]
    UnrecognizedLayout(PathBuf),

    /// A required column is absent from a table header.
    #[error("'{path}' is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    /// A cell failed a type or range check.
    #[error("'{path}', row {row}, column '{column}': invalid value '{value}' ({reason})")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// File content is not what the format requires.
    #[error("'{path}' is not a valid {format}: {message}")]
    InvalidContent {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    /// No partition contained a maxCSS summary.
    #[error("No GUNC maxCSS results found in '{0}'")]
    EmptyResult(PathBuf),

    /// Semantic type string not known to the registry.
    #[error("Unknown semantic type: {0}")]
    UnknownSemanticType(String),

    /// Format name not known to the registry.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// No transformer registered for the requested view.
    #[error("No transformer registered from {format} to {view}")]
    UnregisteredTransformer {
        format: &'static str,
        view: &'static str,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuncError {
    /// Build an IO error bound to a path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GuncError::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuncError::Io { .. } => ErrorKind::Io,
            GuncError::MissingEntry { .. }
            | GuncError::AmbiguousEntry { .. }
            | GuncError::MixedLayout { .. }
            | GuncError::UnrecognizedLayout(_)
            | GuncError::UnknownSemanticType(_)
            | GuncError::UnknownFormat(_)
            | GuncError::UnregisteredTransformer { .. } => ErrorKind::Structural,
            GuncError::MissingColumn { .. }
            | GuncError::InvalidValue { .. }
            | GuncError::InvalidContent { .. }
            | GuncError::Csv(_)
            | GuncError::Json(_) => ErrorKind::Schema,
            GuncError::EmptyResult(_) => ErrorKind::EmptyResult,
        }
    }
}

/// Result type alias for GUNC format operations.
pub type Result<T> = std::result::Result<T, GuncError>;
