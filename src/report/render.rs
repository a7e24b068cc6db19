// src/report/render.rs
// =============================================================================
// Turns a ValidationResult into something a human or a script can read.
//
// Two formats:
// - text: three blocks (SUMMARY, BROKEN LINKS DETAIL, BROKEN LINKS BY FILE)
// - json: one pretty-printed object, for CI pipelines and other tools
//
// Both return a String; printing is left to main.rs.
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::summary::{BrokenLink, CategoryCounts, ValidationResult};
use crate::corpus::CorpusWarning;
use crate::error::Result;

const RULE_WIDTH: usize = 80;

// JSON shape of a report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    clean: bool,
    summary: JsonSummary,
    broken: &'a [BrokenLink],
    by_file: BTreeMap<&'a str, Vec<&'a BrokenLink>>,
    warnings: &'a [CorpusWarning],
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    total: usize,
    counts: CategoryCounts,
    broken: usize,
    broken_counts: CategoryCounts,
}

pub fn render_json(result: &ValidationResult, warnings: &[CorpusWarning]) -> Result<String> {
    let report = JsonReport {
        clean: result.is_clean(),
        summary: JsonSummary {
            total: result.total,
            counts: result.counts,
            broken: result.broken_count(),
            broken_counts: result.broken_counts,
        },
        broken: &result.broken,
        by_file: result.by_file(),
        warnings,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_text(result: &ValidationResult, warnings: &[CorpusWarning]) -> String {
    TextReport { result, warnings }.to_string()
}

// The three-block text report, written straight into a Formatter
struct TextReport<'a> {
    result: &'a ValidationResult,
    warnings: &'a [CorpusWarning],
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "MARKDOWN LINK VALIDATION REPORT")?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;

        for warning in self.warnings {
            writeln!(f, "⚠️  WARNING: {warning}")?;
        }
        if !self.warnings.is_empty() {
            writeln!(f)?;
        }

        write_summary(f, self.result, &light, &heavy)?;
        write_detail(f, self.result, &light, &heavy)?;
        write_by_file(f, self.result, &light, &heavy)
    }
}

fn write_summary(
    f: &mut fmt::Formatter<'_>,
    result: &ValidationResult,
    light: &str,
    heavy: &str,
) -> fmt::Result {
    let counts = &result.counts;
    let broken = &result.broken_counts;

    writeln!(f, "SUMMARY")?;
    writeln!(f, "{light}")?;
    writeln!(f, "Total links checked: {}", result.total)?;
    writeln!(f, "  - Internal file links: {}", counts.file)?;
    writeln!(f, "  - Internal anchor links: {}", counts.anchor)?;
    writeln!(f, "  - External URLs: {}", counts.external)?;
    writeln!(f)?;
    writeln!(f, "Total broken links: {}", result.broken_count())?;
    writeln!(f, "  - Broken internal file links: {}", broken.file)?;
    writeln!(f, "  - Broken internal anchor links: {}", broken.anchor)?;
    writeln!(f, "  - Malformed external URLs: {}", broken.external)?;
    writeln!(f)?;
    writeln!(f, "{heavy}")?;
    writeln!(f)
}

fn write_detail(
    f: &mut fmt::Formatter<'_>,
    result: &ValidationResult,
    light: &str,
    heavy: &str,
) -> fmt::Result {
    if result.is_clean() {
        writeln!(f, "✅ NO BROKEN LINKS FOUND!")?;
        return writeln!(f);
    }

    writeln!(f, "BROKEN LINKS DETAIL")?;
    writeln!(f, "{light}")?;
    writeln!(f)?;

    for (i, link) in result.broken.iter().enumerate() {
        writeln!(f, "{}. {} (line {})", i + 1, link.source, link.line)?;
        writeln!(f, "   Link text: [{}]", link.text)?;
        writeln!(f, "   Target: {}", link.target)?;
        writeln!(f, "   Type: {}", link.category)?;
        writeln!(f, "   Error: {}", link.error)?;
        writeln!(f)?;
    }

    writeln!(f, "{heavy}")?;
    writeln!(f)
}

fn write_by_file(
    f: &mut fmt::Formatter<'_>,
    result: &ValidationResult,
    light: &str,
    heavy: &str,
) -> fmt::Result {
    writeln!(f, "BROKEN LINKS BY FILE")?;
    writeln!(f, "{light}")?;
    writeln!(f)?;

    let groups = result.by_file();
    if groups.is_empty() {
        writeln!(f, "✅ No files with broken links!")?;
        return writeln!(f);
    }

    for (path, links) in &groups {
        writeln!(f, "{path}: {} broken link(s)", links.len())?;
        for link in links {
            writeln!(f, "  - Line {}: [{}]({})", link.line, link.text, link.target)?;
            writeln!(f, "    Error: {}", link.error)?;
        }
        writeln!(f)?;
    }

    writeln!(f, "{heavy}")
}
