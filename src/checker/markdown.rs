// src/checker/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// We deliberately do NOT run a full Markdown parser here. Links are found by
// a line-oriented pattern: `[display text](target)`, matched independently on
// every line. That means:
// - a link split across two lines is not reported
// - several links on one line are all reported, left to right
// - links inside code blocks are reported too (the renderer is not emulated)
//
// Rust concepts:
// - Iterators: extraction is lazy, one line at a time
// - LazyLock: the regex is compiled once per process
// - Clone on an iterator: gives a cheap way to restart a scan
// =============================================================================

use std::collections::VecDeque;
use std::iter::Enumerate;
use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// `[text](target)`: text cannot contain `]`, target cannot contain `)`.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is a valid regex")
});

/// One occurrence of `[text](target)` in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownLink {
    /// The display text between the square brackets
    pub text: String,
    /// The raw target as written, including any `#fragment`
    pub target: String,
    /// 1-based line number the link appears on
    pub line: usize,
}

// Lazy iterator over the links of a document.
//
// Lines are only scanned when the caller asks for the next link. Cloning the
// iterator before it is consumed gives an independent scan of the same text.
#[derive(Debug, Clone)]
pub struct MarkdownLinks<'a> {
    lines: Enumerate<Lines<'a>>,
    pending: VecDeque<MarkdownLink>,
}

impl Iterator for MarkdownLinks<'_> {
    type Item = MarkdownLink;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(link) = self.pending.pop_front() {
                return Some(link);
            }

            // Pull the next line; when there are none left we are done
            let (index, line) = self.lines.next()?;
            self.pending.extend(links_on_line(line, index + 1));
        }
    }
}

// Extracts every `[text](target)` occurrence from Markdown text
//
// Parameters:
//   markdown: the document text (borrowed as &str)
//
// Returns: a lazy iterator of MarkdownLink in document order
//
// Example input:
//   "See [intro](#intro) and [guide](docs/guide.md)"
//
// Example output (both on line 1):
//   MarkdownLink { text: "intro", target: "#intro", line: 1 }
//   MarkdownLink { text: "guide", target: "docs/guide.md", line: 1 }
pub fn extract_markdown_links(markdown: &str) -> MarkdownLinks<'_> {
    MarkdownLinks {
        lines: markdown.lines().enumerate(),
        pending: VecDeque::new(),
    }
}

fn links_on_line(line: &str, line_number: usize) -> impl Iterator<Item = MarkdownLink> + '_ {
    LINK_PATTERN.captures_iter(line).map(move |caps| MarkdownLink {
        text: caps[1].to_string(),
        target: caps[2].to_string(),
        line: line_number,
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a custom iterator instead of returning Vec<MarkdownLink>?
//    - Large documents do not need all their links in memory at once
//    - The caller decides when to stop (e.g. take(10) for a preview)
//    - Collecting into a Vec is still one .collect() away
//
// 2. What does the `?` do inside next()?
//    - self.lines.next() returns Option<(usize, &str)>
//    - `?` on an Option returns None early when there is nothing left
//    - So the loop ends exactly when the text runs out of lines
//
// 3. What is '_ in MarkdownLinks<'_>?
//    - The iterator borrows the markdown text
//    - '_ tells Rust "use the lifetime of the input" without naming it
//
// 4. Why caps[1] and caps[2]?
//    - Capture group 0 is the whole match `[text](target)`
//    - Group 1 is the text, group 2 is the target
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(markdown: &str) -> Vec<MarkdownLink> {
        extract_markdown_links(markdown).collect()
    }

    #[test]
    fn test_extract_simple_link() {
        let links = collect("Check out [Rust](https://www.rust-lang.org)!");
        assert_eq!(
            links,
            vec![MarkdownLink {
                text: "Rust".to_string(),
                target: "https://www.rust-lang.org".to_string(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_extract_multiple_links_with_line_numbers() {
        let markdown = "# Resources\n\n- [Rust](https://www.rust-lang.org)\n- [Guide](docs/guide.md)\n- [Intro](#intro)\n";
        let links = collect(markdown);
        let lines: Vec<usize> = links.iter().map(|l| l.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert_eq!(links[1].target, "docs/guide.md");
        assert_eq!(links[2].target, "#intro");
    }

    #[test]
    fn test_same_line_links_keep_left_to_right_order() {
        let links = collect("[a](one.md) then [b](two.md#x) then [c](http://c.example)");
        let targets: Vec<&str> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["one.md", "two.md#x", "http://c.example"]);
        assert!(links.iter().all(|l| l.line == 1));
    }

    #[test]
    fn test_keeps_relative_and_mailto_targets() {
        let links = collect("See [docs](./docs/README.md) or [email](mailto:test@example.com)");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "./docs/README.md");
        assert_eq!(links[1].target, "mailto:test@example.com");
    }

    #[test]
    fn test_link_split_across_lines_is_ignored() {
        assert!(collect("[broken\ntext](target.md)").is_empty());
        assert!(collect("[text](\ntarget.md)").is_empty());
    }

    #[test]
    fn test_empty_text_or_target_is_not_a_link() {
        assert!(collect("[](target.md) and [text]()").is_empty());
    }

    #[test]
    fn test_iterator_can_be_restarted_by_cloning() {
        let scan = extract_markdown_links("[a](a.md)\n[b](b.md)");
        let first: Vec<_> = scan.clone().collect();
        let second: Vec<_> = scan.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_empty_document_has_no_links() {
        assert!(collect("").is_empty());
    }
}
