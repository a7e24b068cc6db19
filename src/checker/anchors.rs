// src/checker/anchors.rs
// =============================================================================
// Headings and the anchor slugs derived from them.
//
// A heading is a line starting with 1 to 6 `#` characters followed by
// whitespace and some text. Its anchor (slug) is computed by:
//   1. dropping every character that is not an ASCII letter, ASCII digit,
//      whitespace or `-`
//   2. trimming leading and trailing whitespace
//   3. replacing each run of whitespace with a single `-`
//   4. lowercasing
//
// Hyphens that were already in the text are kept as they are, so
// "A - B" becomes "a---b". Runs of hyphens are never collapsed and leading or
// trailing hyphens are never stripped.
// =============================================================================

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is a valid regex")
});

/// A heading line found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Number of leading `#` characters (1-6)
    pub level: usize,
    /// Heading text as written, after the `#`s and separating whitespace
    pub text: String,
    /// 1-based line number
    pub line: usize,
}

impl Heading {
    /// The anchor this heading is addressable by.
    pub fn slug(&self) -> String {
        slugify(&self.text)
    }
}

// Extracts every heading line in document order
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    markdown
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let caps = HEADING_PATTERN.captures(line)?;
            Some(Heading {
                level: caps[1].len(),
                text: caps[2].to_string(),
                line: index + 1,
            })
        })
        .collect()
}

/// Converts heading text to its anchor identifier.
///
/// ```
/// use link_guardian::checker::slugify;
///
/// assert_eq!(slugify("The Problem!!"), "the-problem");
/// assert_eq!(slugify("Step 2: Run `cargo`"), "step-2-run-cargo");
/// ```
pub fn slugify(heading: &str) -> String {
    let kept: String = heading
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    // split_whitespace both trims the ends and treats each run as one gap
    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}

// Computes the set of anchors a document exposes.
// Two headings with the same slug collapse into one entry.
pub fn anchor_set(markdown: &str) -> BTreeSet<String> {
    extract_headings(markdown)
        .iter()
        .map(Heading::slug)
        .collect()
}
