//! Show-config command - print the effective configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where configuration is read from
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(flatten)]
    pub config: Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<ConfigSources>,
}

/// Files consulted while loading configuration
#[derive(Debug, Serialize)]
pub struct ConfigSources {
    pub env_config: Option<String>,
    pub local_config: String,
    pub user_config: Option<String>,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config: services.config.as_ref().clone(),
        sources: args.all.then(config_sources),
    };

    match format {
        OutputFormat::Human => print_config(&response),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn config_sources() -> ConfigSources {
    ConfigSources {
        env_config: std::env::var("MDINDEX_CONFIG").ok(),
        local_config: crate::core::config::LOCAL_CONFIG_FILE.to_string(),
        user_config: Config::user_config_file().map(|p| p.display().to_string()),
    }
}

fn print_config(response: &ConfigResponse) {
    let config = &response.config;

    println!("{}", colors::label("Configuration:"));
    println!("  site:");
    println!("    site_dir: {}", config.site.site_dir.display());
    println!("    base_url: {}", config.site.base_url);
    println!("  index:");
    println!("    docs_dir: {}", config.index.docs_dir);
    println!("    route_base_path: {}", config.index.route_base_path);
    println!("    max_len: {}", config.index.max_len);
    println!("    include_patterns: {:?}", config.index.include_patterns);
    println!("    exclude_patterns: {:?}", config.index.exclude_patterns);
    println!("    keep_code: {}", config.index.keep_code);
    println!("    keep_tables: {}", config.index.keep_tables);
    println!("  output:");
    println!("    out_dir: {}", config.output.out_dir.display());
    println!("    file_name: {}", config.output.file_name);
    println!("    plugin_name: {}", config.output.plugin_name);

    if let Some(sources) = &response.sources {
        println!("{}", colors::label("Sources:"));
        println!(
            "  MDINDEX_CONFIG: {}",
            sources.env_config.as_deref().unwrap_or("(unset)")
        );
        println!("  local: {}", sources.local_config);
        println!(
            "  user: {}",
            sources.user_config.as_deref().unwrap_or("(unavailable)")
        );
    }
}
