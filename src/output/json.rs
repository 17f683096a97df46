// src/output/json.rs
// =============================================================================
// The structured format: the whole ordered result set as one pretty-printed
// JSON array. The field shape lives on ProbeResult's serde derives (tagged
// outcome, optional response fields, position withheld).
// =============================================================================

use anyhow::{Context, Result};

use crate::probe::ProbeResult;

/// Serializes the ordered result set as one JSON document.
pub fn render(results: &[ProbeResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results as JSON")
}
