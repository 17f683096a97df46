// src/probe/model.rs
// =============================================================================
// The value types that flow through the whole pipeline:
//
//   ProbeJob    - one pending request, tagged with its original position
//   ProbeResult - the immutable outcome of executing one job
//   ProbeOutcome- SUCCESS, or FAILURE with a human-readable reason
//
// Jobs are created once by the job source, claimed exactly once by a
// worker, and turned into exactly one result. Results are read-only after
// creation; the collector and the output formatters only ever look at them.
//
// Rust concepts:
// - Enums with data: Failure carries its reason alongside the variant
// - serde attributes: control exactly how records appear in JSON
// =============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

/// One pending probe: everything a worker needs to fire a single request.
#[derive(Debug, Clone)]
pub struct ProbeJob {
    /// Index in the original input order. Used only to reassemble results
    /// at the end of the run, never for scheduling.
    pub position: usize,
    /// Fully resolved target (scheme + host + path), never a bare host.
    pub target: Url,
    /// HTTP method token. Not validated here - a bad token surfaces as a
    /// request-construction failure in the worker.
    pub method: String,
    /// Value for the User-Agent header.
    pub user_agent: String,
}

// How did the probe end?
//
// The tagged serde representation merges into the result record, so a JSON
// entry reads either {"outcome": "success", ...} or
// {"outcome": "failure", "reason": "..."}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// A response came back, whatever its status code was.
    Success,
    /// Anything that prevented a round trip: bad method token, malformed
    /// target, DNS/connect/TLS errors, timeout.
    Failure { reason: String },
}

impl ProbeOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        ProbeOutcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success)
    }

    /// Short display form used by the progress lines and the text formats:
    /// "SUCCESS", or "FAIL: <reason>".
    pub fn label(&self) -> String {
        match self {
            ProbeOutcome::Success => "SUCCESS".to_string(),
            ProbeOutcome::Failure { reason } => format!("FAIL: {}", reason),
        }
    }
}

/// The immutable record of one executed probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Copied from the originating job; ordering metadata only, so it is
    /// kept out of the serialized report.
    #[serde(skip)]
    pub position: usize,

    // Decomposed target, for display and per-file grouping
    pub scheme: String,
    pub host: String,
    pub path: String,

    /// Method actually used for the request.
    pub request_method: String,
    /// The serialized request exactly as it went onto the wire (request
    /// line + headers). Empty only when the request couldn't be built.
    pub request_dump: String,

    #[serde(flatten)]
    pub outcome: ProbeOutcome,

    /// Numeric status code; present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,
    /// Serialized response (status line + headers + body); present only
    /// on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_dump: Option<String>,
}

impl ProbeResult {
    /// Reassembles the full target URL for display (grep format).
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.path)
    }

    /// Status code as text, or the empty string when there was no response.
    pub fn status_display(&self) -> String {
        self.response_status
            .map(|code| code.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_success() -> ProbeResult {
        ProbeResult {
            position: 3,
            scheme: "https".to_string(),
            host: "example.com".to_string(),
            path: "/login".to_string(),
            request_method: "HEAD".to_string(),
            request_dump: "HEAD /login HTTP/1.1\r\n\r\n".to_string(),
            outcome: ProbeOutcome::Success,
            response_status: Some(200),
            response_dump: Some("HTTP/1.1 200 OK\r\n\r\n".to_string()),
        }
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(ProbeOutcome::Success.label(), "SUCCESS");
        assert_eq!(
            ProbeOutcome::failure("connection refused").label(),
            "FAIL: connection refused"
        );
    }

    #[test]
    fn test_url_reassembly() {
        assert_eq!(sample_success().url(), "https://example.com/login");
    }

    #[test]
    fn test_json_shape_on_success() {
        let value = serde_json::to_value(sample_success()).unwrap();
        assert_eq!(value["outcome"], "success");
        assert_eq!(value["response_status"], 200);
        // position is ordering metadata, not report data
        assert!(value.get("position").is_none());
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn test_json_shape_on_failure() {
        let mut result = sample_success();
        result.outcome = ProbeOutcome::failure("timed out");
        result.response_status = None;
        result.response_dump = None;

        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["outcome"], "failure");
        assert_eq!(value["reason"], "timed out");
        assert!(value.get("response_status").is_none());
        assert!(value.get("response_dump").is_none());
    }
}
