// src/lib.rs
// =============================================================================
// link-guardian library root.
//
// The binary in src/main.rs is a thin shell around this crate. Everything
// that decides whether a link is broken lives here so it can be embedded in
// other tools and tested without spawning a process.
//
// Pipeline (see engine.rs):
//   file list -> corpus (documents, links, headings)
//             -> anchor index (built once, before any link is checked)
//             -> classify + resolve + validate every link
//             -> ValidationResult (counts, broken links, grouping by file)
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod report;

pub use engine::{Engine, ValidationRun};
pub use error::{GuardianError, Result};

// Process exit codes used by the binary.
// The engine itself never exits; it only reports.
pub const EXIT_CLEAN: i32 = 0;
pub const EXIT_BROKEN_LINKS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
