// src/corpus/document.rs
// =============================================================================
// A single markdown document and everything derived from it.
//
// The file is read once. Its anchors and links are computed right away and
// never change afterwards.
// =============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::checker::{anchor_set, extract_markdown_links, MarkdownLink};

/// A document that could not be loaded.
///
/// These are reported next to the link report; they never abort a run.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusWarning {
    #[error("File not found: {path}")]
    MissingInput { path: String },

    #[error("Error reading {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl CorpusWarning {
    pub fn path(&self) -> &str {
        match self {
            CorpusWarning::MissingInput { path } | CorpusWarning::Unreadable { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    /// Corpus-relative path, as given in the input list
    pub rel_path: String,
    /// Absolute path (corpus root joined with rel_path)
    pub path: PathBuf,
    pub anchors: BTreeSet<String>,
    pub links: Vec<MarkdownLink>,
}

impl Document {
    // Reads `root/rel_path` and derives its anchors and links
    //
    // Returns: the Document, or the warning to report instead of it
    pub fn load(root: &Path, rel_path: &str) -> Result<Self, CorpusWarning> {
        let path = crate::checker::normalize(&root.join(rel_path));

        match fs::read_to_string(&path) {
            Ok(text) => Ok(Self::from_text(rel_path, path, &text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CorpusWarning::MissingInput {
                path: rel_path.to_string(),
            }),
            Err(err) => Err(CorpusWarning::Unreadable {
                path: rel_path.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    pub fn from_text(rel_path: &str, path: PathBuf, text: &str) -> Self {
        Self {
            rel_path: rel_path.to_string(),
            path,
            anchors: anchor_set(text),
            links: extract_markdown_links(text).collect(),
        }
    }
}
