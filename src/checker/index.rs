// src/checker/index.rs
// =============================================================================
// Lookup table: absolute document path -> set of anchors it exposes.
//
// The table is filled from every corpus document before any link is checked,
// so documents that link to each other never need references to one another.
// A link may still point at an existing file that was not in the input list;
// that file is read and slugged the first time it is asked for and the result
// is kept for the rest of the run.
// =============================================================================

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::anchors::anchor_set;

#[derive(Debug, Default)]
pub struct AnchorIndex {
    anchors: HashMap<PathBuf, BTreeSet<String>>,
}

impl AnchorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // Registers a document whose anchors were computed up front
    pub fn insert(&mut self, path: PathBuf, anchors: BTreeSet<String>) {
        self.anchors.insert(path, anchors);
    }

    // Returns the anchors of the file at `path`.
    //
    // Callers must have checked that `path` is an existing regular file.
    // A file that cannot be read as UTF-8 exposes no anchors.
    pub fn anchors_for(&mut self, path: &Path) -> &BTreeSet<String> {
        self.anchors
            .entry(path.to_path_buf())
            .or_insert_with(|| match fs::read_to_string(path) {
                Ok(text) => {
                    debug!(path = %path.display(), "slugging headings of file outside the corpus");
                    anchor_set(&text)
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "cannot read anchor target");
                    BTreeSet::new()
                }
            })
    }
}
