// Normalization of realistic documentation pages

use mdindex::core::indexer::headings::extract_headings;
use mdindex::core::indexer::markdown::{normalize, MarkdownNormalizer};
use mdindex::core::indexer::StripOptions;

const INSTALL_PAGE: &str = r#"# Installation

Install the **CLI** with your package manager:

```bash
npm install --global widget-cli
```

## Requirements

| Tool | Version |
|------|---------|
| Node | 18+     |

- A supported OS ([see the matrix](./platforms.md))
- Network access

> **Note:** proxies are _not_ supported yet.

![Installer screenshot](./img/install.png)
"#;

#[test]
fn test_install_page_default_options() {
    let text = normalize(Some(INSTALL_PAGE));

    assert_eq!(
        text,
        "Installation Install the CLI with your package manager: \
         Requirements A supported OS (see the matrix) Network access \
         Note: proxies are not supported yet. Installer screenshot"
    );
}

#[test]
fn test_install_page_keeps_code_and_tables() {
    let normalizer = MarkdownNormalizer::new(StripOptions {
        keep_code: true,
        keep_tables: true,
    });

    let text = normalizer.normalize(INSTALL_PAGE);

    assert!(text.contains("npm install --global widget-cli"));
    assert!(text.contains("Tool Version Node 18+"));
    assert!(!text.contains('|'));
    assert!(!text.contains("```"));
}

#[test]
fn test_normalized_text_has_no_markup() {
    let text = normalize(Some(INSTALL_PAGE));

    for marker in ["#", "**", "```", "](", "> ", "  "] {
        assert!(
            !text.contains(marker),
            "Found {marker:?} in normalized text: {text}"
        );
    }
}

#[test]
fn test_normalize_is_idempotent_on_output() {
    let once = normalize(Some(INSTALL_PAGE));
    let twice = normalize(Some(&once));

    assert_eq!(once, twice);
}

#[test]
fn test_headings_from_normalized_page() {
    let headings = extract_headings(&normalize(Some(
        "# Overview\n\nThe widget renders charts. It also exports them!",
    )));

    assert_eq!(
        headings,
        vec!["Overview The widget renders charts", "It also exports them"]
    );
}

#[test]
fn test_non_latin_text_survives() {
    let text = normalize(Some("# Введение\n\n中文 **文档** 🦀 примеры"));

    assert_eq!(text, "Введение 中文 文档 🦀 примеры");
}
