// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Synthetic site with a `docs/` directory
#[allow(dead_code)] // Used in integration tests
pub struct TestSite {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestSite {
    /// A small documentation site (5 pages, one nested section)
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_docs(&[
            (
                "intro.md",
                "---\ntitle: Introduction\n---\n# Welcome\n\nThis site documents the widget API.",
            ),
            (
                "guide/getting-started.md",
                "---\ntitle: \"Getting Started\"\n---\n# Hello\n\nThis is **bold** text.",
            ),
            (
                "guide/advanced_usage.mdx",
                "## Tuning\n\nUse `--fast` for speed. See [the FAQ](../faq.md).",
            ),
            ("faq.md", "# FAQ\n\n- Is it free? Yes.\n- Does it scale? Mostly."),
            (
                "reference/config.md",
                "+++\ntitle = \"Configuration\"\n+++\nAll options are optional.",
            ),
        ])
    }

    /// A site with `count` generated pages
    #[allow(dead_code)] // Used in integration tests
    pub fn generated(count: usize) -> Self {
        let files: Vec<(String, String)> = (0..count)
            .map(|i| {
                (
                    format!("section-{}/page-{}.md", i % 5, i),
                    format!(
                        "---\ntitle: Page {i}\n---\n# Page {i}\n\nBody text for page {i}. More text follows here."
                    ),
                )
            })
            .collect();

        Self::with_docs(
            files
                .iter()
                .map(|(f, c)| (f.as_str(), c.as_str()))
                .collect::<Vec<_>>()
                .as_slice(),
        )
    }

    /// Create a site with the given files under `docs/`
    pub fn with_docs(files: &[(&str, &str)]) -> Self {
        let prefixed: Vec<(String, &str)> = files
            .iter()
            .map(|(path, content)| (format!("docs/{path}"), *content))
            .collect();
        let specs: Vec<(&str, &str)> = prefixed
            .iter()
            .map(|(path, content)| (path.as_str(), *content))
            .collect();

        Self::with_files(&specs)
    }

    /// Create a site with files relative to the site root
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Write raw bytes to a path under `docs/`
    #[allow(dead_code)] // Used in integration tests
    pub fn write_bytes(&self, path: &str, bytes: &[u8]) -> PathBuf {
        let full_path = self.docs_path().join(path);
        std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        std::fs::write(&full_path, bytes).unwrap();
        full_path
    }

    /// Site root
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The `docs/` directory
    #[allow(dead_code)] // Used in integration tests
    pub fn docs_path(&self) -> PathBuf {
        self.dir.path().join("docs")
    }
}
