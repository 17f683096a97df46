// src/jobs/mod.rs
// =============================================================================
// This module turns the raw input list into probe jobs.
//
// One line of input becomes one job (full URL) or two jobs (bare host,
// probed over both http and https). Positions are assigned here, densely
// and in order - everything downstream relies on them to reassemble
// results after the concurrent phase scrambles completion order.
// =============================================================================

mod source;

// Re-export the job-building entry points
pub use source::{jobs_from_lines, load_jobs};
