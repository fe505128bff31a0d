//! Document discovery.
//!
//! Walks a docs directory and collects Markdown files by file-name
//! glob. Dotfiles and dot-directories below the root are never
//! visited. A docs directory that does not exist simply has no
//! documents. Any directory that exists but cannot be read, at any
//! depth, fails discovery: a partial index is never returned.

use glob::Pattern;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{MdIndexError, Result};

/// Default document patterns: plain Markdown and MDX
pub const DEFAULT_DOC_PATTERNS: [&str; 2] = ["*.md", "*.mdx"];

/// File system walker that finds document files
#[derive(Debug, Clone)]
pub struct DocumentWalker {
    /// File-name patterns to include (e.g., "*.md")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/node_modules/**")
    exclude_patterns: Vec<Pattern>,
}

impl Default for DocumentWalker {
    fn default() -> Self {
        Self {
            include_patterns: DEFAULT_DOC_PATTERNS
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl DocumentWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for document files;
    ///   empty means the default Markdown patterns
    /// * `exclude_patterns` - Glob patterns for paths to skip
    ///
    /// # Returns
    ///
    /// A new `DocumentWalker` or an error if a pattern is invalid
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut walker = Self {
            include_patterns: compile_patterns(include_patterns, "include")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
        };

        if walker.include_patterns.is_empty() {
            walker.include_patterns = Self::default().include_patterns;
        }

        Ok(walker)
    }

    /// Collect all document files below `root`
    ///
    /// Returned paths are absolute. Entries are visited in file-name
    /// order so repeated runs over the same tree agree, but callers
    /// should not depend on the order.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            tracing::debug!("Docs directory {:?} does not exist", root);
            return Ok(Vec::new());
        }

        let root = root.canonicalize().map_err(|e| {
            MdIndexError::DiscoveryFailed(format!("Cannot resolve {}: {e}", root.display()))
        })?;

        if !root.is_dir() {
            return Err(MdIndexError::DiscoveryFailed(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_visit(e))
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.matches_patterns(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                // Entries that vanish mid-walk (or dangling links) are not errors
                Err(e) if e.io_error().map(|io| io.kind()) == Some(ErrorKind::NotFound) => {
                    tracing::debug!("Skipping missing entry: {}", e);
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root.as_path()).to_path_buf();
                    return Err(MdIndexError::DiscoveryFailed(format!(
                        "Cannot read {}: {e}",
                        path.display()
                    )));
                }
            }
        }

        Ok(files)
    }

    /// Skip dot entries and excluded directories (never the root)
    fn should_visit(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        let is_hidden = entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false);
        if is_hidden {
            return false;
        }

        if entry.file_type().is_dir()
            && self
                .exclude_patterns
                .iter()
                .any(|p| p.matches_path(entry.path()))
        {
            tracing::debug!("Skipping excluded directory: {:?}", entry.path());
            return false;
        }

        true
    }

    /// Check a file against the include/exclude patterns
    fn matches_patterns(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            return false;
        };

        let included = self
            .include_patterns
            .iter()
            .any(|p| p.matches(file_name) || p.matches_path(path));

        included && !self.exclude_patterns.iter().any(|p| p.matches_path(path))
    }
}

fn compile_patterns(patterns: &[String], kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                MdIndexError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}"))
            })
        })
        .collect()
}
