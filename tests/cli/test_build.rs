//! Tests for the build CLI command
//!
//! Tests the build command handler:
//! - Building a site and writing the artifact
//! - Publishing into the shared registry
//! - Argument overrides (docs dir, routes, max length, output dir)
//! - Error cases (missing site directory, bad patterns)

use crate::cli::test_helpers::{build_args, create_cli_test_services, create_cli_test_services_with};
use crate::common::TestSite;
use mdindex::cli::commands::build::execute;
use mdindex::cli::OutputFormat;
use mdindex::core::publish::read_artifact;
use tempfile::TempDir;

/// Test building a site (human format)
#[tokio::test]
async fn test_build_writes_artifact_human() {
    let services = create_cli_test_services();
    let site = TestSite::small();

    let result = execute(build_args(site.path()), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());

    let artifact = site.path().join(".mdindex").join("md-index.json");
    let records = read_artifact(&artifact).unwrap();
    assert_eq!(records.len(), 5);
}

/// Test building a site (JSON format)
#[tokio::test]
async fn test_build_json_format() {
    let services = create_cli_test_services();
    let site = TestSite::small();

    let result = execute(build_args(site.path()), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());
}

/// Build publishes into the registry under the configured plugin name
#[tokio::test]
async fn test_build_publishes_to_registry() {
    let services = create_cli_test_services_with(|config| {
        config.output.plugin_name = "docs-search".to_string();
    });
    let site = TestSite::small();

    execute(build_args(site.path()), &services, OutputFormat::Human)
        .await
        .unwrap();

    let registry = services.registry.read().await;
    assert_eq!(registry.names(), vec!["docs-search"]);
    let index = registry.get("docs-search").unwrap();
    assert_eq!(index.len(), 5);
    assert!(index.find("/docs/guide/getting-started").is_some());
}

/// Rebuilding replaces the published index
#[tokio::test]
async fn test_rebuild_replaces_published_index() {
    let services = create_cli_test_services();
    let site = TestSite::with_docs(&[("one.md", "One")]);

    execute(build_args(site.path()), &services, OutputFormat::Human)
        .await
        .unwrap();
    std::fs::write(site.docs_path().join("two.md"), "Two").unwrap();
    execute(build_args(site.path()), &services, OutputFormat::Human)
        .await
        .unwrap();

    let registry = services.registry.read().await;
    assert_eq!(registry.get("md-index").unwrap().len(), 2);
}

/// --no-write skips the artifact but still publishes
#[tokio::test]
async fn test_build_no_write() {
    let services = create_cli_test_services();
    let site = TestSite::small();

    let mut args = build_args(site.path());
    args.no_write = true;
    execute(args, &services, OutputFormat::Human).await.unwrap();

    assert!(!site.path().join(".mdindex").exists());
    assert!(services.registry.read().await.get("md-index").is_some());
}

/// Overrides flow into routes, text length and output location
#[tokio::test]
async fn test_build_overrides() {
    let services = create_cli_test_services();
    let site = TestSite::with_files(&[(
        "handbook/policies/leave.md",
        "# Leave\n\nEmployees accrue leave monthly.",
    )]);
    let out = TempDir::new().unwrap();

    let mut args = build_args(site.path());
    args.docs_dir = Some("handbook".to_string());
    args.route_base_path = Some("/".to_string());
    args.base_url = Some("/intranet/".to_string());
    args.max_len = Some(5);
    args.out_dir = Some(out.path().to_path_buf());
    execute(args, &services, OutputFormat::Json).await.unwrap();

    let records = read_artifact(&out.path().join("md-index.json")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].route, "/intranet/policies/leave");
    assert_eq!(records[0].title, "leave");
    assert_eq!(records[0].text, "Leave");
}

/// Per-file failures do not fail the command
#[tokio::test]
async fn test_build_with_failures_succeeds() {
    let services = create_cli_test_services();
    let site = TestSite::with_docs(&[("ok.md", "Fine"), ("broken.md", "---\ntitle: x\n")]);

    let result = execute(build_args(site.path()), &services, OutputFormat::Json).await;
    assert!(result.is_ok());

    let registry = services.registry.read().await;
    assert_eq!(registry.get("md-index").unwrap().len(), 1);
}

/// Test error for missing site directory
#[tokio::test]
async fn test_build_missing_site_dir() {
    let services = create_cli_test_services();
    let temp = TempDir::new().unwrap();

    let result = execute(
        build_args(&temp.path().join("nope")),
        &services,
        OutputFormat::Human,
    )
    .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("does not exist"), "Unexpected error: {err}");
}

/// Test error for an invalid exclude pattern
#[tokio::test]
async fn test_build_invalid_pattern() {
    let services = create_cli_test_services_with(|config| {
        config.index.exclude_patterns = vec!["[".to_string()];
    });
    let site = TestSite::small();

    let result = execute(build_args(site.path()), &services, OutputFormat::Human).await;

    assert!(result.is_err());
    assert!(services.registry.read().await.names().is_empty());
}
