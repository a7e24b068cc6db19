// src/report/summary.rs
// =============================================================================
// Aggregates validated links into the numbers and lists a report needs.
//
// Read-only: the links are borrowed, counted and the broken ones copied into
// BrokenLink records. Order is always the order links were validated in, so
// two runs over the same corpus produce identical results.
// =============================================================================

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::checker::{LinkCategory, ValidatedLink};

/// Link counts split by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub file: usize,
    pub anchor: usize,
    pub external: usize,
}

impl CategoryCounts {
    fn bump(&mut self, category: LinkCategory) {
        match category {
            LinkCategory::File => self.file += 1,
            LinkCategory::Anchor => self.anchor += 1,
            LinkCategory::External => self.external += 1,
        }
    }
}

/// Everything needed to trace a broken link back to its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    pub source: String,
    pub line: usize,
    pub text: String,
    pub target: String,
    pub category: LinkCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<PathBuf>,
    pub error: String,
}

impl BrokenLink {
    fn from_link(link: &ValidatedLink) -> Option<Self> {
        let error = link.verdict.error()?;
        Some(Self {
            source: link.source.clone(),
            line: link.line,
            text: link.text.clone(),
            target: link.target.clone(),
            category: link.category,
            resolved: link.resolved.clone(),
            error: error.to_string(),
        })
    }
}

/// Corpus-wide result of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub total: usize,
    pub counts: CategoryCounts,
    pub broken_counts: CategoryCounts,
    /// Broken links in extraction order
    pub broken: Vec<BrokenLink>,
}

impl ValidationResult {
    // Builds the aggregate from every validated link of a run
    pub fn from_links<'a, I>(links: I) -> Self
    where
        I: IntoIterator<Item = &'a ValidatedLink>,
    {
        let mut result = Self::default();
        for link in links {
            result.total += 1;
            result.counts.bump(link.category);
            if let Some(broken) = BrokenLink::from_link(link) {
                result.broken_counts.bump(broken.category);
                result.broken.push(broken);
            }
        }
        result
    }

    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }

    // True when nothing is broken
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }

    // Broken links grouped by source document, documents sorted by path.
    // Within a document, links keep their extraction order.
    pub fn by_file(&self) -> BTreeMap<&str, Vec<&BrokenLink>> {
        let mut groups: BTreeMap<&str, Vec<&BrokenLink>> = BTreeMap::new();
        for link in &self.broken {
            groups.entry(link.source.as_str()).or_default().push(link);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Verdict;

    fn validated(source: &str, line: usize, category: LinkCategory, broken: bool) -> ValidatedLink {
        ValidatedLink {
            source: source.to_string(),
            line,
            text: format!("link {line}"),
            target: format!("target-{line}"),
            category,
            resolved: None,
            verdict: if broken {
                Verdict::Broken(format!("broken at {line}"))
            } else {
                Verdict::Valid
            },
        }
    }

    #[test]
    fn test_empty_run_is_clean() {
        let result = ValidationResult::from_links(&Vec::<ValidatedLink>::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.broken_count(), 0);
        assert!(result.by_file().is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn test_counts_by_category() {
        let links = vec![
            validated("a.md", 1, LinkCategory::File, false),
            validated("a.md", 2, LinkCategory::File, true),
            validated("a.md", 3, LinkCategory::Anchor, true),
            validated("b.md", 1, LinkCategory::External, false),
            validated("b.md", 2, LinkCategory::External, true),
            validated("b.md", 3, LinkCategory::Anchor, false),
        ];
        let result = ValidationResult::from_links(&links);

        assert_eq!(result.total, 6);
        assert_eq!(
            result.counts,
            CategoryCounts {
                file: 2,
                anchor: 2,
                external: 2
            }
        );
        assert_eq!(
            result.broken_counts,
            CategoryCounts {
                file: 1,
                anchor: 1,
                external: 1
            }
        );
        assert_eq!(result.broken_count(), 3);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_broken_keeps_extraction_order() {
        let links = vec![
            validated("z.md", 4, LinkCategory::File, true),
            validated("a.md", 9, LinkCategory::File, true),
            validated("z.md", 2, LinkCategory::File, true),
        ];
        let result = ValidationResult::from_links(&links);
        let order: Vec<(&str, usize)> = result
            .broken
            .iter()
            .map(|b| (b.source.as_str(), b.line))
            .collect();
        assert_eq!(order, vec![("z.md", 4), ("a.md", 9), ("z.md", 2)]);
        assert_eq!(result.broken[0].error, "broken at 4");
    }

    #[test]
    fn test_by_file_sorts_paths_but_not_links() {
        let links = vec![
            validated("z.md", 4, LinkCategory::File, true),
            validated("a.md", 9, LinkCategory::Anchor, true),
            validated("z.md", 2, LinkCategory::File, true),
            validated("m.md", 1, LinkCategory::File, false),
        ];
        let result = ValidationResult::from_links(&links);
        let groups = result.by_file();

        let files: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(files, vec!["a.md", "z.md"]);
        let z_lines: Vec<usize> = groups["z.md"].iter().map(|b| b.line).collect();
        assert_eq!(z_lines, vec![4, 2]);
    }
}
