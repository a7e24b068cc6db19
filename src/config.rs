// src/config.rs
// =============================================================================
// Where the corpus root and the file list come from.
//
// Sources, highest priority first:
//   1. command-line flags (see cli.rs)
//   2. a TOML config file (`link-guardian.toml` in the root, or --config)
//   3. defaults: root = current directory, files = every markdown file found
//      by walking the root
//
// Example link-guardian.toml:
//
//   root = "."
//   files = ["README.md", "docs/README.md"]
//   exclude = ["vendor/**"]
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::cli::CheckArgs;
use crate::corpus::discover_markdown_files;
use crate::error::{GuardianError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "link-guardian.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Corpus root; relative paths are taken from the config file's directory
    pub root: Option<PathBuf>,
    /// Explicit, ordered document list (corpus-relative)
    pub files: Option<Vec<String>>,
    /// Globs left out of the directory walk
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GuardianError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            toml::from_str(&text).map_err(|source| GuardianError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let (Some(root), Some(dir)) = (config.root.as_ref(), path.parent()) {
            if root.is_relative() {
                config.root = Some(dir.join(root));
            }
        }
        Ok(config)
    }

    // Loads `dir/link-guardian.toml` if it exists
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            debug!(path = %path.display(), "using config file");
            Self::from_path(&path).map(Some)
        } else {
            Ok(None)
        }
    }
}

// Reads a newline-separated list of corpus-relative paths.
// Blank lines and lines starting with '#' are ignored.
pub fn read_file_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| GuardianError::FileListRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_file_list(&text))
}

fn parse_file_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Fully resolved inputs for one `check` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub root: PathBuf,
    pub files: Vec<String>,
}

impl RunPlan {
    // Merges flags, config file and defaults into a root and a file list
    pub fn from_args(args: &CheckArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Some(Config::from_path(path)?),
            None => {
                let dir = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
                Config::discover(&dir)?
            }
        }
        .unwrap_or_default();

        let root = args
            .root
            .clone()
            .or_else(|| config.root.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let mut files = args.files.clone();
        if let Some(list) = &args.files_from {
            files.extend(read_file_list(list)?);
        }

        let files = if !files.is_empty() {
            files
        } else if let Some(listed) = config.files {
            listed
        } else {
            let mut exclude = config.exclude;
            exclude.extend(args.exclude.iter().cloned());
            discover_markdown_files(&root, &exclude)?
        };

        Ok(Self { root, files })
    }
}
