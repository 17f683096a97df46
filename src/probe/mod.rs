// src/probe/mod.rs
// =============================================================================
// This module contains everything about a single probe:
//
// Submodules:
// - model: the ProbeJob / ProbeResult / ProbeOutcome value types
// - client: the one shared reqwest::Client and its hardening knobs
// - http: executing a job and capturing the wire-level dumps
//
// This file (mod.rs) is the module root - it re-exports the public API so
// the rest of the crate writes `probe::execute(...)` instead of
// `probe::http::execute(...)`.
// =============================================================================

mod client;
mod http;
mod model;

// Re-export public items from submodules
pub use client::{build_client, DEFAULT_TIMEOUT};
pub use http::execute;
pub use model::{ProbeJob, ProbeOutcome, ProbeResult};
