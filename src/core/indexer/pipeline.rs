//! Index build orchestration.
//!
//! Coordinates the end-to-end build:
//! 1. Discover document files under the docs directory
//! 2. Read each file and split off its front matter
//! 3. Normalize the body to plain text and truncate it
//! 4. Resolve route and title, extract heading candidates
//!
//! Each file is processed on its own; a failure skips that file and
//! is recorded, only discovery failures abort the build.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::config::BuildConfig;
use crate::core::error::{MdIndexError, Result};
use crate::core::indexer::frontmatter;
use crate::core::indexer::headings::extract_headings;
use crate::core::indexer::route::{resolve_route, resolve_title};
use crate::core::indexer::{DocumentWalker, MarkdownNormalizer};
use crate::core::types::{BuildOutput, DocumentRecord, FileFailure, IndexStats};

/// A document file loaded for processing
struct RawDocument {
    path: PathBuf,
    content: String,
}

impl RawDocument {
    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            // Invalid UTF-8 surfaces as InvalidData
            if e.kind() == std::io::ErrorKind::InvalidData {
                MdIndexError::ReadFailed(format!("{} is not valid UTF-8", path.display()))
            } else {
                MdIndexError::ReadFailed(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }
}

/// Builds the document index for one site
pub struct IndexBuilder {
    config: BuildConfig,
    walker: DocumentWalker,
    normalizer: MarkdownNormalizer,
}

impl IndexBuilder {
    /// Create a new builder
    ///
    /// # Returns
    ///
    /// A new `IndexBuilder`, or an error if a configured glob pattern
    /// is invalid
    pub fn new(config: BuildConfig) -> Result<Self> {
        let walker = DocumentWalker::new(&config.include_patterns, &config.exclude_patterns)?;
        let normalizer = MarkdownNormalizer::new(config.strip);

        Ok(Self {
            config,
            walker,
            normalizer,
        })
    }

    /// Build the index
    ///
    /// Files that fail to read or parse are logged, recorded in
    /// [`BuildOutput::failures`] and left out of the records.
    ///
    /// # Errors
    ///
    /// Discovery failures, and any error that is not file-scoped, are
    /// returned and abort the build.
    pub fn build(&self) -> Result<BuildOutput> {
        let start = Instant::now();
        let docs_dir = self.config.docs_dir();

        tracing::info!("Discovering documents in {:?}", docs_dir);
        let files = self.walker.discover(&docs_dir)?;
        tracing::info!("Found {} documents to index", files.len());

        // Discovery returns canonical paths
        let docs_root = docs_dir.canonicalize().unwrap_or(docs_dir);

        let mut records = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for (idx, path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            match self.process_file(&docs_root, path) {
                Ok(record) => {
                    tracing::debug!("Indexed {:?} as {}", path, record.route);
                    records.push(record);
                }
                Err(e) if e.is_file_scoped() => {
                    tracing::warn!("Failed to process {:?}: {}", path, e);
                    failures.push(FileFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Index complete: {} documents indexed, {} skipped in {}ms",
            records.len(),
            failures.len(),
            duration_ms
        );

        let stats = IndexStats {
            files_discovered: files.len(),
            documents_indexed: records.len(),
            files_skipped: failures.len(),
            duration_ms,
        };

        Ok(BuildOutput {
            records,
            failures,
            stats,
        })
    }

    /// Process a single file into its index record
    fn process_file(&self, docs_root: &Path, path: &Path) -> Result<DocumentRecord> {
        let document = RawDocument::read(path)?;
        let relative = relative_route_path(docs_root, &document.path)?;
        self.process_document(&relative, &document.content)
    }

    /// Turn raw document content into a record
    ///
    /// `relative_path` is the document's path below the docs
    /// directory, using `/` separators.
    pub fn process_document(&self, relative_path: &str, raw: &str) -> Result<DocumentRecord> {
        let (front_matter, body) = frontmatter::split(raw)?;

        let mut text = self.normalizer.normalize(body);
        truncate_chars(&mut text, self.config.max_text_length);

        let route = resolve_route(
            relative_path,
            &self.config.base_url,
            &self.config.route_base_path,
        );
        let title = resolve_title(front_matter.title(), relative_path);
        let headings = extract_headings(&text);

        Ok(DocumentRecord {
            route,
            title,
            headings,
            text,
        })
    }
}

/// Build an index with a one-off builder
pub fn build(config: &BuildConfig) -> Result<BuildOutput> {
    IndexBuilder::new(config.clone())?.build()
}

/// Cut `text` to at most `max_chars` characters
///
/// The cut always lands on a character boundary.
pub fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
    }
}

/// Path of `path` relative to `docs_root`, joined with `/`
fn relative_route_path(docs_root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(docs_root).map_err(|_| {
        MdIndexError::ProcessingFailed(format!(
            "{} is outside {}",
            path.display(),
            docs_root.display()
        ))
    })?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
