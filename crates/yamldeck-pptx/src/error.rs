//! Error types for deck loading and PPTX generation.

use std::path::Path;
use thiserror::Error;

/// Result type for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while loading a deck or writing its package
#[derive(Error, Debug)]
pub enum DeckError {
    /// Deck config file missing or unreadable
    #[error("Cannot read deck config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    /// Deck config is not valid YAML or does not match the deck schema
    #[error("Invalid deck config: {0}")]
    Deserialize(#[from] serde_saphyr::Error),

    /// Image referenced by a slide missing or unreadable
    #[error("Cannot read image {path}: {source}")]
    ImageRead {
        path: String,
        source: std::io::Error,
    },

    /// Output file could not be created or truncated
    #[error("Cannot create output {path}: {source}")]
    OutputCreate {
        path: String,
        source: std::io::Error,
    },

    /// Run text holds a character XML 1.0 cannot represent
    #[error("Slide {slide} has text that cannot be written as XML: {text:?}")]
    InvalidText { slide: usize, text: String },

    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error while writing the package
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Broad failure class of a [`DeckError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or schema-mismatched deck config
    Deserialization,
    /// Missing or unreadable input, or unwritable output location
    FileAccess,
    /// The package could not be assembled or serialized
    Packaging,
}

impl DeckError {
    /// Create a config read error
    pub fn config_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create an image read error
    pub fn image_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ImageRead {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create an output creation error
    pub fn output_create(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::OutputCreate {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create an invalid text error
    pub fn invalid_text(slide: usize, text: impl Into<String>) -> Self {
        Self::InvalidText {
            slide,
            text: text.into(),
        }
    }

    /// Get the failure class
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Deserialize(_) => ErrorKind::Deserialization,
            Self::ConfigRead { .. } | Self::ImageRead { .. } | Self::OutputCreate { .. } => {
                ErrorKind::FileAccess
            }
            Self::InvalidText { .. } | Self::ZipError(_) | Self::IoError(_) => {
                ErrorKind::Packaging
            }
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigRead { .. } => "DECK001",
            Self::Deserialize(_) => "DECK002",
            Self::ImageRead { .. } => "DECK003",
            Self::OutputCreate { .. } => "DECK004",
            Self::ZipError(_) => "DECK005",
            Self::IoError(_) => "DECK006",
            Self::InvalidText { .. } => "DECK007",
        }
    }
}
