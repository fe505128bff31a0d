//! Tests for the show-config CLI command

use crate::cli::test_helpers::{create_cli_test_services, create_cli_test_services_with};
use mdindex::cli::commands::config::{execute, ConfigArgs};
use mdindex::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_human() {
    let services = create_cli_test_services();

    let result = execute(ConfigArgs { all: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_config_json_with_sources() {
    let services = create_cli_test_services_with(|config| {
        config.site.base_url = "/site/".to_string();
    });

    let result = execute(ConfigArgs { all: true }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
