//! mdindex CLI - build plain-text search indexes from Markdown docs
//!
//! # Examples
//!
//! ```bash
//! # Index ./website/docs and write ./website/.mdindex/md-index.json
//! mdindex build ./website
//!
//! # Docs served at the site root, machine-readable summary
//! mdindex build ./website --route-base-path / --format json
//!
//! # Show configuration
//! mdindex show-config
//! ```

use clap::Parser;
use mdindex::cli::output::print_error;
use mdindex::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "mdindex=debug"
    } else {
        "mdindex=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let json = std::env::var("MDINDEX_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
