//! Core domain logic (frontend-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Index records and build statistics
//! - **indexer**: Discovery, normalization and build orchestration
//! - **publish**: JSON artifact and in-process registry
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod publish;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::{BuildConfig, Config};
pub use error::{MdIndexError, Result};
pub use services::Services;
