// src/checker/validate.rs
// =============================================================================
// Decides whether a single link is valid.
//
// One rule per category:
// - external: the target must start with http:// or https://. Nothing is
//   fetched; remote reachability is never checked.
// - file:     the resolved path must exist and be a regular file.
// - anchor:   the resolved file must exist, and a non-empty fragment must be
//             one of that file's heading anchors.
//
// Every outcome is a Verdict. Nothing here returns an error or panics on a
// bad link, so one malformed target can never stop a run.
// =============================================================================

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::classify::{has_url_scheme, LinkCategory, LinkTarget};
use super::index::AnchorIndex;
use super::markdown::MarkdownLink;
use super::resolve::resolve_target;

/// Outcome of checking one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    /// The link is broken; the message says why
    Broken(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Broken(message) => Some(message.as_str()),
        }
    }
}

/// A link after classification, resolution and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedLink {
    /// Corpus-relative path of the document the link was found in
    pub source: String,
    pub line: usize,
    pub text: String,
    pub target: String,
    pub category: LinkCategory,
    /// Absolute target path; None for external links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<PathBuf>,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl ValidatedLink {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

// Checks one extracted link
//
// Parameters:
//   source_rel: corpus-relative path of the containing document (for reports)
//   source:     absolute path of the containing document (for resolution)
//   link:       the extracted link
//   index:      anchors of every document, filled lazily for non-corpus files
pub fn validate_link(
    source_rel: &str,
    source: &Path,
    link: &MarkdownLink,
    index: &mut AnchorIndex,
) -> ValidatedLink {
    let target = LinkTarget::parse(&link.target);

    let (resolved, verdict) = match target {
        LinkTarget::External { url } => (None, check_external(url)),
        LinkTarget::File { path } => {
            let resolved = resolve_target(source, path);
            let verdict = check_file(&resolved);
            (Some(resolved), verdict)
        }
        LinkTarget::Anchor { file, fragment } => {
            let resolved = resolve_target(source, file);
            let verdict = check_anchor(&resolved, fragment, index);
            (Some(resolved), verdict)
        }
    };

    ValidatedLink {
        source: source_rel.to_string(),
        line: link.line,
        text: link.text.clone(),
        target: link.target.clone(),
        category: target.category(),
        resolved,
        verdict,
    }
}

pub fn check_external(url: &str) -> Verdict {
    if has_url_scheme(url) {
        Verdict::Valid
    } else {
        Verdict::Broken("External URL must start with http:// or https://".to_string())
    }
}

pub fn check_file(resolved: &Path) -> Verdict {
    if resolved.is_file() {
        Verdict::Valid
    } else {
        Verdict::Broken(format!("File does not exist: {}", resolved.display()))
    }
}

pub fn check_anchor(resolved: &Path, fragment: &str, index: &mut AnchorIndex) -> Verdict {
    if !resolved.is_file() {
        return Verdict::Broken(format!(
            "Target file does not exist: {}",
            resolved.display()
        ));
    }

    // `file.md#` names no anchor, so there is nothing more to check
    if fragment.is_empty() {
        return Verdict::Valid;
    }

    if index.anchors_for(resolved).contains(fragment) {
        Verdict::Valid
    } else {
        let name = resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| resolved.display().to_string());
        Verdict::Broken(format!("Anchor '{fragment}' not found in {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::anchors::anchor_set;
    use std::fs;
    use tempfile::TempDir;

    fn link(target: &str) -> MarkdownLink {
        MarkdownLink {
            text: "x".to_string(),
            target: target.to_string(),
            line: 7,
        }
    }

    // docs/a.md has "# Intro", docs/b.md has "## The Problem!!"
    fn corpus() -> (TempDir, PathBuf, AnchorIndex) {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("a.md"), "# Intro\n").unwrap();
        fs::write(docs.join("b.md"), "## The Problem!!\n").unwrap();

        let mut index = AnchorIndex::new();
        for name in ["a.md", "b.md"] {
            let path = docs.join(name);
            let text = fs::read_to_string(&path).unwrap();
            index.insert(path, anchor_set(&text));
        }
        let source = docs.join("a.md");
        (dir, source, index)
    }

    #[test]
    fn test_external_links() {
        assert!(check_external("https://example.com").is_valid());
        assert!(check_external("http://example.com").is_valid());

        let verdict = check_external("ftp://x");
        assert!(verdict.error().unwrap().contains("http:// or https://"));
    }

    #[test]
    fn test_external_link_has_no_resolved_path() {
        let (_dir, source, mut index) = corpus();
        let result = validate_link("docs/a.md", &source, &link("https://example.com"), &mut index);
        assert_eq!(result.category, LinkCategory::External);
        assert_eq!(result.resolved, None);
        assert!(result.is_valid());
    }

    #[test]
    fn test_existing_file_link() {
        let (_dir, source, mut index) = corpus();
        let result = validate_link("docs/a.md", &source, &link("b.md"), &mut index);
        assert!(result.is_valid());
        assert_eq!(result.category, LinkCategory::File);
        assert_eq!(result.line, 7);
    }

    #[test]
    fn test_missing_file_reports_resolved_path() {
        let (dir, source, mut index) = corpus();
        let result = validate_link("docs/a.md", &source, &link("../missing.md"), &mut index);

        let expected = dir.path().join("missing.md");
        assert_eq!(result.resolved.as_deref(), Some(expected.as_path()));
        let error = result.verdict.error().unwrap();
        assert!(error.contains(&expected.display().to_string()));
        assert!(!error.contains(".."));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let (dir, source, mut index) = corpus();
        let result = validate_link("docs/a.md", &source, &link(".."), &mut index);
        assert!(!result.is_valid());
        assert_eq!(result.resolved.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_same_document_anchor() {
        let (_dir, source, mut index) = corpus();
        let ok = validate_link("docs/a.md", &source, &link("#intro"), &mut index);
        assert!(ok.is_valid());
        assert_eq!(ok.resolved.as_deref(), Some(source.as_path()));

        let broken = validate_link("docs/a.md", &source, &link("#outro"), &mut index);
        assert_eq!(
            broken.verdict,
            Verdict::Broken("Anchor 'outro' not found in a.md".to_string())
        );
    }

    #[test]
    fn test_cross_document_anchor() {
        let (_dir, source, mut index) = corpus();
        let ok = validate_link("docs/a.md", &source, &link("b.md#the-problem"), &mut index);
        assert!(ok.is_valid());

        let broken = validate_link(
            "docs/a.md",
            &source,
            &link("b.md#missing-section"),
            &mut index,
        );
        let error = broken.verdict.error().unwrap();
        assert!(error.contains("missing-section"));
        assert!(error.contains("b.md"));
    }

    #[test]
    fn test_anchor_into_missing_file() {
        let (_dir, source, mut index) = corpus();
        let result = validate_link("docs/a.md", &source, &link("gone.md#x"), &mut index);
        assert!(result
            .verdict
            .error()
            .unwrap()
            .starts_with("Target file does not exist"));
    }

    #[test]
    fn test_empty_fragment_is_satisfied() {
        let (_dir, source, mut index) = corpus();
        let result = validate_link("docs/a.md", &source, &link("b.md#"), &mut index);
        assert!(result.is_valid());
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_value(Verdict::Broken("nope".to_string())).unwrap();
        assert_eq!(json["status"], "broken");
        assert_eq!(json["error"], "nope");
    }
}
