// src/checker/resolve.rs
// =============================================================================
// Turns a link target into the absolute path it points at.
//
// Strategy:
// - Cut the target at the first '#' (the fragment is not part of the path)
// - Empty file part  -> the source document itself ("#intro")
// - Otherwise        -> join onto the source document's directory
// - Normalize `.` and `..` lexically, without touching the filesystem
//
// This module never checks whether anything exists. That is the validator's
// job, so the same function serves both file links and anchor links.
// =============================================================================

use std::path::{Component, Path, PathBuf};

// Returns the part of a target before the first '#'
//
// Examples:
//   "guide.md#setup" -> "guide.md"
//   "#intro"         -> ""
//   "guide.md"       -> "guide.md"
pub fn file_part(target: &str) -> &str {
    match target.split_once('#') {
        Some((file, _)) => file,
        None => target,
    }
}

// Resolves a target relative to the document that contains it
//
// Parameters:
//   source: absolute path of the document the link was found in
//   target: the raw link target (may include a #fragment)
//
// Returns: absolute, normalized path of the target file
pub fn resolve_target(source: &Path, target: &str) -> PathBuf {
    let file = file_part(target);
    if file.is_empty() {
        return normalize(source);
    }

    let base = source.parent().unwrap_or_else(|| Path::new(""));
    normalize(&base.join(file))
}

// Lexically normalizes a path: drops `.`, folds `..` into its parent.
// A `..` that would climb above the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not std::fs::canonicalize?
//    - canonicalize() fails when the path does not exist
//    - A broken link points at something that does not exist, and we still
//      want to print where it was supposed to be
//
// 2. What is Component?
//    - Path::components() splits a path into pieces: root, `.`, `..`, names
//    - Matching on them lets us rebuild the path without string hacks
//
// 3. What does Path::join do with an absolute path?
//    - "docs".join("/etc/x.md") gives "/etc/x.md"
//    - So a target like "/README.md" is taken as an absolute filesystem path
// -----------------------------------------------------------------------------
