//! Document indexing module.
//!
//! Turns a tree of Markdown documents into index records:
//!
//! - Document discovery with glob patterns
//! - Front matter splitting (YAML and TOML)
//! - Markdown to plain text normalization
//! - Route and title resolution
//! - Heading heuristics
//! - Build orchestration with per-file failure isolation

pub mod frontmatter;
pub mod headings;
pub mod markdown;
pub mod pipeline;
pub mod route;
pub mod walker;

pub use markdown::{MarkdownNormalizer, StripOptions};
pub use pipeline::IndexBuilder;
pub use walker::DocumentWalker;
