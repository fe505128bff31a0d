//! mdindex - plain-text search index for Markdown docs
//!
//! Walks a docs directory, strips each Markdown document down to
//! plain text and produces one record per document:
//! `{ route, title, headings, text }`. The records are meant for a
//! client-side site search; this crate does no ranking or querying
//! of its own.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types
//!   - indexer (discovery, front matter, normalization, routes)
//!   - publish (JSON artifact, registry)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use mdindex::core::indexer::pipeline::build;
//! use mdindex::BuildConfig;
//!
//! let output = build(&BuildConfig::new("./website")).unwrap();
//! for record in &output.records {
//!     println!("{} -> {}", record.route, record.title);
//! }
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::{BuildConfig, Config};
pub use core::error::{MdIndexError, Result};
pub use core::indexer::IndexBuilder;
pub use core::publish::{IndexRegistry, PublishedIndex};
pub use core::services::Services;
pub use core::types::*;
