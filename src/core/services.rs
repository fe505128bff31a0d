//! Unified service container for mdindex
//!
//! Provides shared access to configuration and the index registry.

use crate::core::config::{BuildConfig, Config};
use crate::core::error::Result;
use crate::core::indexer::IndexBuilder;
use crate::core::publish::IndexRegistry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Unified services container
///
/// Cloning is cheap; clones share the same registry.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Indexes published by completed builds
    pub registry: Arc<RwLock<IndexRegistry>>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(RwLock::new(IndexRegistry::new())),
        }
    }

    /// Build settings from the loaded configuration
    pub fn build_config(&self) -> BuildConfig {
        self.config.build_config()
    }

    /// Create an IndexBuilder for request-specific settings
    pub fn create_builder(&self, build_config: BuildConfig) -> Result<IndexBuilder> {
        IndexBuilder::new(build_config)
    }
}
