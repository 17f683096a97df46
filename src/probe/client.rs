// src/probe/client.rs
// =============================================================================
// Builds the one shared reqwest::Client used by every worker.
//
// The client is configuration, not state: workers clone it freely (clones
// share the same connection pool internally) and never coordinate around
// it. Three settings matter for probing:
//
// - a fixed per-request timeout (the only cancellation mechanism we have)
// - redirects are NEVER followed: a 301/302 is a finding, not a detour,
//   so the redirect response itself is the final answer for that target
// - certificate verification can be switched off for self-signed or
//   expired targets (the -k flag)
// =============================================================================

use anyhow::{Context, Result};
use reqwest::{redirect, Client};
use std::time::Duration;

/// Per-request timeout applied to every probe.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared probing client.
///
/// Fails only on TLS backend initialization problems, which is fatal for
/// the whole run anyway.
pub fn build_client(timeout: Duration, insecure: bool) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(timeout)
        // Treat a redirect response as the final response for the target
        .redirect(redirect::Policy::none());

    if insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().context("Failed to build HTTP client")
}
