//! Core data types for mdindex.
//!
//! Defines the index record published for each document together
//! with the bookkeeping produced by a build.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of heading candidates kept per document
pub const MAX_HEADINGS: usize = 20;

/// One searchable document in the published index
///
/// Field order is the order keys appear in `md-index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Public route, e.g. `/site/docs/guide/intro`
    pub route: String,

    /// Display title (never empty)
    pub title: String,

    /// Capitalized phrases used as a cheap heading proxy
    pub headings: Vec<String>,

    /// Normalized plain text, truncated to the configured maximum
    pub text: String,
}

/// A document that was skipped during a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// Absolute path of the skipped file
    pub path: PathBuf,

    /// Reason the file was skipped
    pub message: String,
}

/// Statistics from a build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of candidate files found by discovery
    pub files_discovered: usize,

    /// Number of records produced
    pub documents_indexed: usize,

    /// Number of files skipped because of per-file errors
    pub files_skipped: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}

/// Everything a build produces
///
/// Records and failures are kept side by side so callers can
/// publish whatever succeeded and still report what did not.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub records: Vec<DocumentRecord>,
    pub failures: Vec<FileFailure>,
    pub stats: IndexStats,
}

impl BuildOutput {
    /// True when every discovered file produced a record
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
