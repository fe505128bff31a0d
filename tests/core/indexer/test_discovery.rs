// Discovery tests over synthetic doc trees

use crate::common::TestSite;
use mdindex::core::indexer::DocumentWalker;
use mdindex::MdIndexError;
use std::path::PathBuf;

fn relative_names(site: &TestSite, files: &[PathBuf]) -> Vec<String> {
    let docs = site.docs_path().canonicalize().unwrap();
    files
        .iter()
        .map(|p| {
            p.strip_prefix(&docs)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_discover_nested_markdown() {
    let site = TestSite::small();

    let files = DocumentWalker::default()
        .discover(&site.docs_path())
        .unwrap();

    let mut names = relative_names(&site, &files);
    names.sort();
    assert_eq!(
        names,
        vec![
            "faq.md",
            "guide/advanced_usage.mdx",
            "guide/getting-started.md",
            "intro.md",
            "reference/config.md",
        ]
    );
    assert!(files.iter().all(|p| p.is_absolute()));
}

#[test]
fn test_discover_skips_hidden_entries() {
    let site = TestSite::with_docs(&[
        ("visible.md", "Shown"),
        (".draft.md", "Hidden file"),
        (".cache/page.md", "Hidden directory"),
        ("nested/.secret/page.md", "Hidden nested directory"),
    ]);

    let files = DocumentWalker::default()
        .discover(&site.docs_path())
        .unwrap();

    assert_eq!(relative_names(&site, &files), vec!["visible.md"]);
}

#[test]
fn test_discover_ignores_other_extensions() {
    let site = TestSite::with_docs(&[
        ("page.md", "Page"),
        ("page.markdown", "Not matched"),
        ("image.png", "binary"),
        ("notes.md.bak", "Backup"),
        ("sidebar.js", "module.exports = {}"),
    ]);

    let files = DocumentWalker::default()
        .discover(&site.docs_path())
        .unwrap();

    assert_eq!(relative_names(&site, &files), vec!["page.md"]);
}

#[test]
fn test_discover_with_exclude_patterns() {
    let site = TestSite::with_docs(&[
        ("keep.md", "Keep"),
        ("drafts/skip.md", "Skip"),
        ("guide/drafts/also-skip.md", "Skip"),
    ]);

    let walker = DocumentWalker::new(&[], &["**/drafts/**".to_string()]).unwrap();
    let files = walker.discover(&site.docs_path()).unwrap();

    assert_eq!(relative_names(&site, &files), vec!["keep.md"]);
}

#[test]
fn test_discover_with_custom_include() {
    let site = TestSite::with_docs(&[("page.md", "Page"), ("tabs.mdx", "Tabs")]);

    let walker = DocumentWalker::new(&["*.mdx".to_string()], &[]).unwrap();
    let files = walker.discover(&site.docs_path()).unwrap();

    assert_eq!(relative_names(&site, &files), vec!["tabs.mdx"]);
}

#[test]
fn test_discover_missing_root_is_empty() {
    let site = TestSite::with_files(&[("README.md", "No docs here")]);

    let files = DocumentWalker::default()
        .discover(&site.docs_path())
        .unwrap();

    assert!(files.is_empty());
}

#[test]
fn test_discover_file_root_fails() {
    let site = TestSite::with_files(&[("docs", "not a directory")]);

    let result = DocumentWalker::default().discover(&site.docs_path());

    assert!(matches!(result, Err(MdIndexError::DiscoveryFailed(_))));
}

#[test]
fn test_invalid_pattern_rejected() {
    let result = DocumentWalker::new(&["[".to_string()], &[]);

    assert!(matches!(result, Err(MdIndexError::ConfigError(_))));
}
