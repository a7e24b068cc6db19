// src/error.rs
// =============================================================================
// Errors that stop a run before it starts.
//
// A broken link is NOT an error: it is the normal output of the checker and
// is carried as data (see checker::validate::Verdict). Same for a document
// that cannot be read; that becomes a corpus::CorpusWarning. The variants
// below cover the top-level inputs only: config, file lists, patterns and
// report serialization.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardianError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read file list: {path}")]
    FileListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus root is not a directory: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Invalid exclude pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read document: {path}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GuardianError>;
