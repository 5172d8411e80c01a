//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Two sections on the page share an identifier
    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    /// Identifier is empty or not a usable anchor slug
    #[error("Invalid section id {0:?}: expected lowercase letters, digits and '-'")]
    InvalidSectionId(String),

    /// No section with this identifier exists on the page
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Reveal threshold outside the open-closed range (0, 1]
    #[error("Invalid reveal threshold {0}: must be in (0, 1]")]
    InvalidThreshold(f64),

    /// Any other out-of-range reveal setting
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The hosting runtime could not start or feed a visibility observer
    #[error("Observer error: {0}")]
    Observer(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
