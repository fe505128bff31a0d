//! Build command - index a site's Markdown docs

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::publish::write_artifact_as;
use crate::core::services::Services;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Site directory (defaults to the configured site_dir)
    pub site_dir: Option<PathBuf>,

    /// Docs directory, relative to the site directory
    #[arg(long)]
    pub docs_dir: Option<String>,

    /// Route section for docs ("/" for none)
    #[arg(long)]
    pub route_base_path: Option<String>,

    /// Prefix for every route
    #[arg(long)]
    pub base_url: Option<String>,

    /// Maximum characters of text per document
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Directory to write the JSON artifact to
    #[arg(long, short = 'o')]
    pub out_dir: Option<PathBuf>,

    /// Skip writing the JSON artifact
    #[arg(long)]
    pub no_write: bool,

    /// Suppress the build summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// One file that could not be indexed
#[derive(Debug, Serialize)]
pub struct FailureEntry {
    pub path: String,
    pub message: String,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub site_dir: String,
    pub docs_dir: String,
    pub files_discovered: usize,
    pub documents_indexed: usize,
    pub files_skipped: usize,
    pub failures: Vec<FailureEntry>,
    pub artifact: Option<String>,
    pub plugin_name: String,
    pub duration_secs: f64,
    pub built_at: DateTime<Utc>,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut build_config = services.build_config();

    if let Some(site_dir) = args.site_dir {
        build_config.root_dir = site_dir;
    }
    if let Some(docs_dir) = args.docs_dir.filter(|d| !d.trim().is_empty()) {
        build_config.docs_subdir = docs_dir;
    }
    if let Some(route_base_path) = args.route_base_path.filter(|r| !r.trim().is_empty()) {
        build_config.route_base_path = route_base_path;
    }
    if let Some(base_url) = args.base_url {
        build_config.base_url = base_url;
    }
    if let Some(max_len) = args.max_len {
        build_config.max_text_length = max_len;
    }

    // Validate site directory
    let site_dir = &build_config.root_dir;
    if !site_dir.is_dir() {
        return Err(format!(
            "Site directory '{}' does not exist or is not a directory.",
            site_dir.display()
        )
        .into());
    }

    let out_dir = resolve_out_dir(
        site_dir,
        args.out_dir.as_deref().unwrap_or(services.config.output.out_dir.as_path()),
    );
    let site_display = site_dir.display().to_string();
    let docs_display = build_config.docs_dir().display().to_string();

    if !args.quiet && format == OutputFormat::Human {
        eprintln!("Building index for {}...", colors::file_path(&docs_display));
    }

    let builder = services.create_builder(build_config)?;
    let output = tokio::task::spawn_blocking(move || builder.build()).await??;

    let artifact = if args.no_write {
        None
    } else {
        Some(write_artifact_as(
            &out_dir,
            &services.config.output.file_name,
            &output.records,
        )?)
    };

    let plugin_name = services.config.output.plugin_name.clone();
    let failures: Vec<FailureEntry> = output
        .failures
        .iter()
        .map(|f| FailureEntry {
            path: f.path.display().to_string(),
            message: f.message.clone(),
        })
        .collect();
    let stats = output.stats;

    services
        .registry
        .write()
        .await
        .publish(plugin_name.clone(), output.records);

    let response = BuildResponse {
        site_dir: site_display,
        docs_dir: docs_display,
        files_discovered: stats.files_discovered,
        documents_indexed: stats.documents_indexed,
        files_skipped: stats.files_skipped,
        failures,
        artifact: artifact.map(|p| p.display().to_string()),
        plugin_name,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        built_at: Utc::now(),
    };

    match format {
        OutputFormat::Human => {
            if !args.quiet {
                print_summary(&response);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Relative output directories live under the site directory
fn resolve_out_dir(site_dir: &Path, out_dir: &Path) -> PathBuf {
    if out_dir.is_absolute() {
        out_dir.to_path_buf()
    } else {
        site_dir.join(out_dir)
    }
}

fn print_summary(response: &BuildResponse) {
    println!(
        "{} {} of {} documents in {}",
        colors::success("Indexed"),
        colors::number(&response.documents_indexed.to_string()),
        colors::number(&response.files_discovered.to_string()),
        colors::number(&format_duration(response.duration_secs))
    );

    for failure in &response.failures {
        print_warning(&format!(
            "skipped {}: {}",
            colors::file_path(&failure.path),
            failure.message
        ));
    }

    match &response.artifact {
        Some(path) => println!("Wrote {}", colors::file_path(path)),
        None => println!("{}", colors::dim("Artifact not written (--no-write)")),
    }
    println!("Published as {}", colors::label(&response.plugin_name));
}
