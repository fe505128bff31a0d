//! Indexer layer tests
//!
//! Discovery over real directory trees, Markdown normalization and
//! full site builds.

mod test_discovery;
mod test_normalize;
