//! Tests for output formatting helpers

use clap::Parser;
use mdindex::cli::output::format_duration;
use mdindex::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.012), "12ms");
    assert_eq!(format_duration(3.5), "3.50s");
    assert_eq!(format_duration(90.0), "1m 30.0s");
}

#[test]
fn test_parse_build_command() {
    let cli = Cli::parse_from([
        "mdindex",
        "--format",
        "json",
        "build",
        "./website",
        "--route-base-path",
        "/",
        "--max-len",
        "100",
        "--no-write",
    ]);

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Build(args) => {
            assert_eq!(args.site_dir.unwrap().to_str(), Some("./website"));
            assert_eq!(args.route_base_path.as_deref(), Some("/"));
            assert_eq!(args.max_len, Some(100));
            assert!(args.no_write);
            assert!(!args.quiet);
        }
        other => panic!("Expected build command, got {other:?}"),
    }
}

#[test]
fn test_parse_defaults_to_human() {
    let cli = Cli::parse_from(["mdindex", "show-config"]);

    assert_eq!(cli.format, OutputFormat::Human);
    assert!(!cli.verbose);
    assert!(matches!(cli.command, Commands::ShowConfig(_)));
}
