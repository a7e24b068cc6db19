// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts `[text](target)` links from markdown text
// - anchors:  Extracts headings and computes their anchor slugs
// - classify: Sorts a target into external / anchor / file
// - resolve:  Resolves a target to an absolute path
// - index:    Anchor lookup table shared by every anchor check in a run
// - validate: Applies the per-category rule and produces a verdict
//
// Nothing in here touches the process (no printing, no exiting); the only
// I/O is checking whether target files exist and reading anchor targets.
// =============================================================================

mod anchors;
mod classify;
mod index;
mod markdown;
mod resolve;
mod validate;

// Re-export public items from submodules
// This lets users write `checker::classify()` instead of
// `checker::classify::classify()`
pub use anchors::{anchor_set, extract_headings, slugify, Heading};
pub use classify::{classify, has_url_scheme, LinkCategory, LinkTarget};
pub use index::AnchorIndex;
pub use markdown::{extract_markdown_links, MarkdownLink, MarkdownLinks};
pub use resolve::{file_part, normalize, resolve_target};
pub use validate::{check_anchor, check_external, check_file, validate_link, ValidatedLink, Verdict};
