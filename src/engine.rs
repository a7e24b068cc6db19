// src/engine.rs
// =============================================================================
// One validation run, start to finish.
//
// What happens here:
// 1. Load every listed document (missing/unreadable ones become warnings)
// 2. Build the anchor index from ALL loaded documents before checking links
// 3. Validate each link, document by document, in extraction order
// 4. Aggregate the verdicts into a ValidationResult
//
// A run owns all of its state; nothing survives between two runs, and the
// same corpus always produces the same result in the same order.
// =============================================================================

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::checker::{validate_link, AnchorIndex, ValidatedLink};
use crate::corpus::{Corpus, CorpusWarning};
use crate::report::ValidationResult;

/// Everything a run produced.
#[derive(Debug)]
pub struct ValidationRun {
    pub result: ValidationResult,
    /// Every validated link, valid or not, in extraction order
    pub links: Vec<ValidatedLink>,
    pub warnings: Vec<CorpusWarning>,
    /// Number of documents that were loaded
    pub documents: usize,
}

impl ValidationRun {
    pub fn is_clean(&self) -> bool {
        self.result.is_clean()
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    root: PathBuf,
}

impl Engine {
    // Creates an engine for the corpus under `root`.
    //
    // The root is made absolute (and symlinks resolved) when it exists, so
    // diagnostics always show full paths.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = dunce::canonicalize(&root).unwrap_or(root);
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // Runs a full validation over the listed documents
    //
    // Parameters:
    //   paths: corpus-relative document paths, in the order to report them
    pub fn run(&self, paths: &[String]) -> ValidationRun {
        let corpus = Corpus::load(&self.root, paths);

        let mut index = AnchorIndex::new();
        for doc in &corpus.documents {
            index.insert(doc.path.clone(), doc.anchors.clone());
        }

        let mut links = Vec::with_capacity(corpus.link_count());
        for doc in &corpus.documents {
            for link in &doc.links {
                let validated = validate_link(&doc.rel_path, &doc.path, link, &mut index);
                debug!(
                    source = %validated.source,
                    line = validated.line,
                    target = %validated.target,
                    category = %validated.category,
                    valid = validated.is_valid(),
                    "checked link"
                );
                links.push(validated);
            }
        }

        let result = ValidationResult::from_links(&links);
        info!(
            documents = corpus.documents.len(),
            links = result.total,
            broken = result.broken_count(),
            warnings = corpus.warnings.len(),
            "validation finished"
        );

        ValidationRun {
            result,
            links,
            warnings: corpus.warnings,
            documents: corpus.documents.len(),
        }
    }
}
