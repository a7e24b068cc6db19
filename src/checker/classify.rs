// src/checker/classify.rs
// =============================================================================
// Sorts a raw link target into one of three categories:
//
//   external -> starts with "http://" or "https://"
//   anchor   -> contains a '#' anywhere
//   file     -> everything else
//
// The check is purely syntactic and total: every string lands in exactly one
// category, and the category never changes afterwards.
//
// LinkTarget is the same decision, but each variant also carries the pieces
// of the target its validation rule needs.
// =============================================================================

use serde::{Deserialize, Serialize};

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Which validation rule applies to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    External,
    Anchor,
    File,
}

impl LinkCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkCategory::External => "external",
            LinkCategory::Anchor => "anchor",
            LinkCategory::File => "file",
        }
    }
}

impl std::fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Returns true when the target starts with one of the accepted URL schemes.
// Case-sensitive: "HTTP://x" is not external.
pub fn has_url_scheme(target: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| target.starts_with(scheme))
}

// Classifies a raw target string
//
// Examples:
//   "https://example.com"   -> External
//   "#intro"                -> Anchor
//   "guide.md#setup"        -> Anchor
//   "../README.md"          -> File
//   "ftp://files.example"   -> File (no accepted scheme, no '#')
pub fn classify(target: &str) -> LinkCategory {
    if has_url_scheme(target) {
        LinkCategory::External
    } else if target.contains('#') {
        LinkCategory::Anchor
    } else {
        LinkCategory::File
    }
}

/// A classified target, split into the parts its rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// A URL; only its scheme is checked
    External { url: &'a str },
    /// A file path relative to the source document
    File { path: &'a str },
    /// `file#fragment`; `file` is empty for a same-document anchor
    Anchor { file: &'a str, fragment: &'a str },
}

impl<'a> LinkTarget<'a> {
    pub fn parse(target: &'a str) -> Self {
        match classify(target) {
            LinkCategory::External => LinkTarget::External { url: target },
            LinkCategory::File => LinkTarget::File { path: target },
            LinkCategory::Anchor => {
                // classify() guarantees a '#' is present
                let (file, fragment) = target.split_once('#').unwrap_or((target, ""));
                LinkTarget::Anchor { file, fragment }
            }
        }
    }

    pub fn category(&self) -> LinkCategory {
        match self {
            LinkTarget::External { .. } => LinkCategory::External,
            LinkTarget::File { .. } => LinkCategory::File,
            LinkTarget::Anchor { .. } => LinkCategory::Anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_requires_exact_scheme_prefix() {
        assert_eq!(classify("https://example.com"), LinkCategory::External);
        assert_eq!(classify("http://example.com/a#b"), LinkCategory::External);
        assert_eq!(classify("HTTPS://example.com"), LinkCategory::File);
        assert_eq!(classify(" https://example.com"), LinkCategory::File);
        assert_eq!(classify("ftp://x"), LinkCategory::File);
    }

    #[test]
    fn test_hash_anywhere_means_anchor() {
        assert_eq!(classify("#intro"), LinkCategory::Anchor);
        assert_eq!(classify("guide.md#setup"), LinkCategory::Anchor);
        assert_eq!(classify("guide.md#"), LinkCategory::Anchor);
        assert_eq!(classify("mailto:a#b"), LinkCategory::Anchor);
    }

    #[test]
    fn test_everything_else_is_file() {
        assert_eq!(classify("../README.md"), LinkCategory::File);
        assert_eq!(classify("mailto:test@example.com"), LinkCategory::File);
        assert_eq!(classify("img.png"), LinkCategory::File);
    }

    #[test]
    fn test_parse_splits_at_first_hash() {
        assert_eq!(
            LinkTarget::parse("#intro"),
            LinkTarget::Anchor { file: "", fragment: "intro" }
        );
        assert_eq!(
            LinkTarget::parse("a.md#b#c"),
            LinkTarget::Anchor { file: "a.md", fragment: "b#c" }
        );
        assert_eq!(
            LinkTarget::parse("a.md#"),
            LinkTarget::Anchor { file: "a.md", fragment: "" }
        );
    }

    #[test]
    fn test_parse_agrees_with_classify() {
        for raw in ["https://x.io", "#a", "b.md", "c.md#d", "ftp://e"] {
            assert_eq!(LinkTarget::parse(raw).category(), classify(raw));
        }
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&LinkCategory::Anchor).unwrap();
        assert_eq!(json, "\"anchor\"");
        assert_eq!(LinkCategory::External.to_string(), "external");
    }
}
