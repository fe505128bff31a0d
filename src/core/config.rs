//! Configuration management for mdindex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults matching a conventional
//! docs site layout (`docs/` served under `/docs`).

use crate::core::error::{MdIndexError, Result};
use crate::core::indexer::markdown::StripOptions;
use crate::core::indexer::walker::DEFAULT_DOC_PATTERNS;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default docs directory, relative to the site directory
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Default route section for docs
pub const DEFAULT_ROUTE_BASE_PATH: &str = "docs";

/// Default cap on normalized text per document, in characters
pub const DEFAULT_MAX_LEN: usize = 40_000;

/// Default site base URL
pub const DEFAULT_BASE_URL: &str = "/";

/// Debug artifact written after each build
pub const DEFAULT_ARTIFACT_NAME: &str = "md-index.json";

/// Key the published index is registered under
pub const DEFAULT_PLUGIN_NAME: &str = "md-index";

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = "mdindex.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Site-wide settings supplied by the host site
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site root directory
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,

    /// Prefix for every generated route
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Index build settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Docs directory, relative to the site directory
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Route section for docs; "/" for none
    #[serde(default = "default_route_base_path")]
    pub route_base_path: String,

    /// Maximum characters of normalized text per document
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Document file patterns (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Paths to skip (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Keep code block contents in the text
    #[serde(default)]
    pub keep_code: bool,

    /// Keep table cell text
    #[serde(default)]
    pub keep_tables: bool,
}

/// Publishing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the JSON artifact is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Artifact file name
    #[serde(default = "default_artifact_name")]
    pub file_name: String,

    /// Registry key for the published index
    #[serde(default = "default_plugin_name")]
    pub plugin_name: String,
}

// Default value functions
fn default_site_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_docs_dir() -> String {
    DEFAULT_DOCS_DIR.to_string()
}

fn default_route_base_path() -> String {
    DEFAULT_ROUTE_BASE_PATH.to_string()
}

fn default_max_len() -> usize {
    DEFAULT_MAX_LEN
}

fn default_include_patterns() -> Vec<String> {
    DEFAULT_DOC_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".mdindex")
}

fn default_artifact_name() -> String {
    DEFAULT_ARTIFACT_NAME.to_string()
}

fn default_plugin_name() -> String {
    DEFAULT_PLUGIN_NAME.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            base_url: default_base_url(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            route_base_path: default_route_base_path(),
            max_len: default_max_len(),
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
            keep_code: false,
            keep_tables: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            file_name: default_artifact_name(),
            plugin_name: default_plugin_name(),
        }
    }
}

/// Settings for a single index build
///
/// Supplied once per build and never mutated during it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Site root directory
    pub root_dir: PathBuf,

    /// Docs directory, relative to `root_dir`
    pub docs_subdir: String,

    /// Route section for docs; "/" for none
    pub route_base_path: String,

    /// Prefix for every generated route
    pub base_url: String,

    /// Maximum characters of normalized text per document
    pub max_text_length: usize,

    /// Document file patterns
    pub include_patterns: Vec<String>,

    /// Paths to skip
    pub exclude_patterns: Vec<String>,

    /// Which markup-only constructs keep their text
    pub strip: StripOptions,
}

impl BuildConfig {
    /// Build settings with defaults for everything but the site root
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            docs_subdir: default_docs_dir(),
            route_base_path: default_route_base_path(),
            base_url: default_base_url(),
            max_text_length: default_max_len(),
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
            strip: StripOptions::default(),
        }
    }

    /// Absolute-or-relative path of the docs directory
    pub fn docs_dir(&self) -> PathBuf {
        self.root_dir.join(&self.docs_subdir)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MdIndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// TOML file lookup order:
    /// 1. MDINDEX_CONFIG env var
    /// 2. ./mdindex.toml
    /// 3. User config (~/.config/mdindex/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MDINDEX_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            match Self::user_config_file() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            }
        };

        config.merge_env();
        config.apply_fallbacks();
        config.validate()?;

        Ok(config)
    }

    /// Location of the per-user config file
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdindex").join("config.toml"))
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(site_dir) = env::var("MDINDEX_SITE_DIR") {
            self.site.site_dir = PathBuf::from(site_dir);
        }
        if let Ok(base_url) = env::var("MDINDEX_BASE_URL") {
            self.site.base_url = base_url;
        }
        if let Ok(docs_dir) = env::var("MDINDEX_DOCS_DIR") {
            self.index.docs_dir = docs_dir;
        }
        if let Ok(route_base_path) = env::var("MDINDEX_ROUTE_BASE_PATH") {
            self.index.route_base_path = route_base_path;
        }
        if let Ok(max_len) = env::var("MDINDEX_MAX_LEN") {
            if let Ok(len) = max_len.parse() {
                self.index.max_len = len;
            }
        }
        if let Ok(out_dir) = env::var("MDINDEX_OUT_DIR") {
            self.output.out_dir = PathBuf::from(out_dir);
        }
    }

    /// Replace empty docs settings with their defaults
    ///
    /// An empty `docs_dir` or `route_base_path` means "unset", not
    /// "site root"; the root section is spelled "/".
    pub fn apply_fallbacks(&mut self) {
        if self.index.docs_dir.trim().is_empty() {
            self.index.docs_dir = default_docs_dir();
        }
        if self.index.route_base_path.trim().is_empty() {
            self.index.route_base_path = default_route_base_path();
        }
        if self.index.include_patterns.is_empty() {
            self.index.include_patterns = default_include_patterns();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.index.docs_dir.trim().is_empty() {
            return Err(MdIndexError::ConfigError(
                "Docs directory must not be empty".to_string(),
            ));
        }

        for pattern in self
            .index
            .include_patterns
            .iter()
            .chain(&self.index.exclude_patterns)
        {
            Pattern::new(pattern).map_err(|e| {
                MdIndexError::ConfigError(format!("Invalid pattern '{pattern}': {e}"))
            })?;
        }

        if self.output.file_name.trim().is_empty() {
            return Err(MdIndexError::ConfigError(
                "Output file name must not be empty".to_string(),
            ));
        }

        if self.output.plugin_name.trim().is_empty() {
            return Err(MdIndexError::ConfigError(
                "Plugin name must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for one build of this site
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            root_dir: self.site.site_dir.clone(),
            docs_subdir: self.index.docs_dir.clone(),
            route_base_path: self.index.route_base_path.clone(),
            base_url: self.site.base_url.clone(),
            max_text_length: self.index.max_len,
            include_patterns: self.index.include_patterns.clone(),
            exclude_patterns: self.index.exclude_patterns.clone(),
            strip: StripOptions {
                keep_code: self.index.keep_code,
                keep_tables: self.index.keep_tables,
            },
        }
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site dir: {:?}", self.site.site_dir);
        tracing::info!("  Base URL: {}", self.site.base_url);
        tracing::info!("  Docs dir: {}", self.index.docs_dir);
        tracing::info!("  Route base path: {}", self.index.route_base_path);
        tracing::info!("  Max text length: {} chars", self.index.max_len);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.index.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.index.exclude_patterns.len()
        );
        tracing::info!(
            "  Output: {:?}",
            self.output.out_dir.join(&self.output.file_name)
        );
    }
}
