// src/corpus/discover.rs
// =============================================================================
// Finds the markdown files under a corpus root.
//
// Only used when the caller gives no explicit file list. The engine itself
// always works from a list; this is just one way of producing it.
//
// Rules:
// - keep files ending in .md or .markdown
// - skip hidden directories (.git, .github, ...) and target/
// - skip anything matching an --exclude glob (matched on the relative path)
// - return corpus-relative paths with '/' separators, sorted
// =============================================================================

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{GuardianError, Result};

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];
const SKIPPED_DIRS: [&str; 1] = ["target"];

// Compiles the exclude patterns into one matcher
pub fn build_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| GuardianError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| GuardianError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

// Walks `root` and returns the corpus-relative paths of all markdown files
//
// Parameters:
//   root:     directory to walk
//   excludes: glob patterns, relative to root, to leave out
pub fn discover_markdown_files(root: &Path, excludes: &[String]) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(GuardianError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    let excludes = build_excludes(excludes)?;
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = to_corpus_path(relative);
        if excludes.is_match(&relative) {
            debug!(path = %relative, "excluded");
            continue;
        }
        files.push(relative);
    }

    files.sort();
    debug!(count = files.len(), root = %root.display(), "discovered markdown files");
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&&*name)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

fn to_corpus_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# x\n").unwrap();
    }

    #[test]
    fn test_finds_markdown_sorted() {
        let dir = TempDir::new().unwrap();
        for rel in ["z.md", "docs/b.md", "docs/a.markdown", "notes.txt", "factors/01.md"] {
            touch(dir.path(), rel);
        }

        let files = discover_markdown_files(dir.path(), &[]).unwrap();
        assert_eq!(files, vec!["docs/a.markdown", "docs/b.md", "factors/01.md", "z.md"]);
    }

    #[test]
    fn test_skips_hidden_and_target_dirs() {
        let dir = TempDir::new().unwrap();
        for rel in [".git/x.md", ".github/pr.md", "target/doc.md", "README.md"] {
            touch(dir.path(), rel);
        }

        let files = discover_markdown_files(dir.path(), &[]).unwrap();
        assert_eq!(files, vec!["README.md"]);
    }

    #[test]
    fn test_excludes_are_applied() {
        let dir = TempDir::new().unwrap();
        for rel in ["README.md", "vendor/lib/README.md", "docs/draft.md"] {
            touch(dir.path(), rel);
        }

        let excludes = vec!["vendor/**".to_string(), "**/draft.md".to_string()];
        let files = discover_markdown_files(dir.path(), &excludes).unwrap();
        assert_eq!(files, vec!["README.md"]);
    }

    #[test]
    fn test_invalid_exclude_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = discover_markdown_files(dir.path(), &["a[".to_string()]).unwrap_err();
        assert!(matches!(err, GuardianError::InvalidPattern { .. }));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("not-here");
        let err = discover_markdown_files(&root, &[]).unwrap_err();
        assert!(matches!(err, GuardianError::RootNotFound { path } if path == root));
    }

    #[test]
    fn test_file_as_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "README.md");
        let err = discover_markdown_files(&dir.path().join("README.md"), &[]).unwrap_err();
        assert!(matches!(err, GuardianError::RootNotFound { .. }));
    }
}
