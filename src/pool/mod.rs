// src/pool/mod.rs
// =============================================================================
// The concurrent heart of the tool.
//
// Submodules:
// - worker: the fixed-size worker pool draining the shared job queue
// - collector: the ordering barrier that restores original input order
//
// The contract the rest of the crate relies on: feed run_pool() J jobs and
// exactly J results come back (one per job, matching positions), with at
// most `workers` requests ever in flight; collect_ordered() then turns the
// arrival-ordered pile into the final, position-sorted sequence.
// =============================================================================

mod collector;
mod worker;

// Re-export the engine's public surface
pub use collector::collect_ordered;
pub use worker::{run_pool, PoolConfig};
