// src/report/mod.rs
// =============================================================================
// Reporting: aggregation (summary) and presentation (render).
// =============================================================================

mod render;
mod summary;

pub use render::{render_json, render_text};
pub use summary::{BrokenLink, CategoryCounts, ValidationResult};
