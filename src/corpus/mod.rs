// src/corpus/mod.rs
// =============================================================================
// The set of documents being checked.
//
// Submodules:
// - document: loading one file and deriving its headings, anchors and links
// - discover: walking a directory to build the file list (optional)
//
// A Corpus is built fresh for every run and owns its Documents. Nothing is
// cached between runs.
// =============================================================================

mod discover;
mod document;

pub use discover::{build_excludes, discover_markdown_files};
pub use document::{CorpusWarning, Document};

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

#[derive(Debug)]
pub struct Corpus {
    /// Loaded documents, in input-list order
    pub documents: Vec<Document>,
    /// Documents that were listed but could not be loaded
    pub warnings: Vec<CorpusWarning>,
}

impl Corpus {
    // Loads every listed document, in order
    //
    // Missing or unreadable files become warnings and are left out.
    // A path listed twice is only loaded once.
    pub fn load(root: &Path, paths: &[String]) -> Self {
        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(paths.len());
        let mut warnings = Vec::new();

        for rel_path in paths {
            if !seen.insert(rel_path.as_str()) {
                debug!(path = %rel_path, "duplicate entry in file list, skipping");
                continue;
            }

            match Document::load(root, rel_path) {
                Ok(doc) => {
                    debug!(
                        path = %doc.rel_path,
                        links = doc.links.len(),
                        anchors = doc.anchors.len(),
                        "loaded document"
                    );
                    documents.push(doc);
                }
                Err(warning) => {
                    warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        Self {
            documents,
            warnings,
        }
    }

    pub fn link_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.links.len()).sum()
    }
}
