//! Error types for the nuancier_ncs library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nuancier_ncs operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for catalog loading and palette composition
///
/// Per-record problems (malformed NCS codes, unknown adjectives, missing
/// scalar fields) are deliberately NOT errors: every per-record coercion is
/// a total function with a defined fallback, so one bad catalog row never
/// aborts a batch. Only load-time structural problems surface here.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Catalog file could not be read or parsed at all
    #[error("Failed to read catalog {}: {message}", path.display())]
    CatalogRead {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Catalog is missing required columns; processing halts before scoring
    #[error("Catalog {} is missing required columns: {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// Configuration file could not be loaded or deserialized
    #[error("Failed to load configuration: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid request parameter (out-of-range threshold, zero window, ...)
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Export serialization failed
    #[error("Export error: {message}")]
    ExportError { message: String },
}

impl PaletteError {
    /// Create a catalog read error with context
    pub fn catalog_read<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CatalogRead {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::CatalogRead { path, .. } => {
                format!(
                    "Could not read the color catalog {}. Please check the file and try again.",
                    path.display()
                )
            }
            PaletteError::MissingColumns { columns, .. } => {
                format!(
                    "The color catalog is missing the columns: {}. Please fix the catalog header.",
                    columns.join(", ")
                )
            }
            PaletteError::ConfigError { .. } => {
                "Could not load the request configuration. Please check the JSON file.".to_string()
            }
            PaletteError::InvalidParameter { parameter, value } => {
                format!("The value '{value}' is not valid for '{parameter}'.")
            }
            PaletteError::ExportError { .. } => {
                "Could not export the palette. Please try again.".to_string()
            }
        }
    }
}
