//! Publishing built indexes.
//!
//! A finished build is handed off two ways: written to disk as a
//! pretty-printed JSON array (useful for debugging and for static
//! hosting), and registered in an [`IndexRegistry`] under a plugin
//! name so UI code in the same process can read it. The registry is
//! an ordinary value owned by the host; publishing a name again
//! replaces the previous entry.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::config::DEFAULT_ARTIFACT_NAME;
use crate::core::error::Result;
use crate::core::types::DocumentRecord;

/// Write records to `out_dir/md-index.json`
pub fn write_artifact(out_dir: &Path, records: &[DocumentRecord]) -> Result<PathBuf> {
    write_artifact_as(out_dir, DEFAULT_ARTIFACT_NAME, records)
}

/// Write records as a pretty JSON array to `out_dir/file_name`
///
/// Creates `out_dir` if needed and returns the written path.
pub fn write_artifact_as(
    out_dir: &Path,
    file_name: &str,
    records: &[DocumentRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(file_name);
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json)?;

    tracing::debug!("Wrote {} records to {:?}", records.len(), path);
    Ok(path)
}

/// Read a previously written artifact
pub fn read_artifact(path: &Path) -> Result<Vec<DocumentRecord>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// An index made available to consumers
#[derive(Debug, Clone)]
pub struct PublishedIndex {
    /// Registry key, e.g. "md-index"
    pub name: String,

    /// Records in build order
    pub records: Arc<Vec<DocumentRecord>>,

    /// When the index was published
    pub published_at: DateTime<Utc>,
}

impl PublishedIndex {
    /// Look up a record by route
    pub fn find(&self, route: &str) -> Option<&DocumentRecord> {
        self.records.iter().find(|r| r.route == route)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Named indexes available to consumers in this process
#[derive(Debug, Default)]
pub struct IndexRegistry {
    entries: HashMap<String, PublishedIndex>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish records under `name`
    ///
    /// Returns the entry this replaced, if any.
    pub fn publish(
        &mut self,
        name: impl Into<String>,
        records: Vec<DocumentRecord>,
    ) -> Option<PublishedIndex> {
        let name = name.into();
        let index = PublishedIndex {
            name: name.clone(),
            records: Arc::new(records),
            published_at: Utc::now(),
        };

        tracing::info!("Published {} records as '{}'", index.len(), name);
        self.entries.insert(name, index)
    }

    pub fn get(&self, name: &str) -> Option<&PublishedIndex> {
        self.entries.get(name)
    }

    /// Tear down a published index
    pub fn remove(&mut self, name: &str) -> Option<PublishedIndex> {
        self.entries.remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
