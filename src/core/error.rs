//! Error types and error handling for mdindex.
//!
//! Errors fall into two scopes. File-scoped errors (read, front
//! matter, processing) only abandon the document that raised them;
//! the index builder catches them at the per-file boundary. Every
//! other error aborts the build and propagates to the caller.

use thiserror::Error;

/// Result type alias for mdindex operations
pub type Result<T> = std::result::Result<T, MdIndexError>;

/// Main error type for mdindex
#[derive(Error, Debug)]
pub enum MdIndexError {
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Malformed front matter: {0}")]
    FrontMatter(String),

    #[error("Processing failed: {0}")]
    ProcessingFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MdIndexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error only affects a single document
    ///
    /// File-scoped errors are contained by the index builder; the
    /// offending file is skipped and the build continues.
    pub fn is_file_scoped(&self) -> bool {
        matches!(
            self,
            MdIndexError::ReadFailed(_)
                | MdIndexError::FrontMatter(_)
                | MdIndexError::ProcessingFailed(_)
        )
    }
}
