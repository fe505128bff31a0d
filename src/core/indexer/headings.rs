//! Heading heuristic.
//!
//! Structural heading markers are gone by the time text is
//! normalized, so headings are approximated by capitalized phrases:
//! an uppercase letter followed by 2-60 characters that are not
//! sentence terminators, bounded by word boundaries. The result is
//! lossy and only meant as a light weighting signal for search.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::MAX_HEADINGS;

static CAPITALIZED_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][^.!?]{2,60})\b").expect("valid heading regex"));

/// Extract up to [`MAX_HEADINGS`] capitalized phrases in order of appearance
pub fn extract_headings(text: &str) -> Vec<String> {
    CAPITALIZED_PHRASE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .take(MAX_HEADINGS)
        .map(|m| m.as_str().to_string())
        .collect()
}
