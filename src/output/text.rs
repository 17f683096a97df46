// src/output/text.rs
// =============================================================================
// The plaintext formats: one banner-delimited record per result.
//
// A record looks like:
//
//   ///////////////////////////////
//   HEAD example.com => 200 [SUCCESS]
//   --------
//   <raw request dump><raw response dump>
//
// The digest is simply every record concatenated. The per-target raw files
// reuse the exact same record shape, one record per file.
// =============================================================================

use crate::probe::ProbeResult;

const BANNER: &str = "///////////////////////////////";

/// Renders one result as a banner-delimited raw record.
pub fn record(result: &ProbeResult) -> String {
    let mut out = format!(
        "{}\n{} {} => {} [{}]\n",
        BANNER,
        result.request_method,
        result.host,
        result.status_display(),
        result.outcome.label()
    );
    out.push_str("--------\n");
    out.push_str(&result.request_dump);
    out.push_str(result.response_dump.as_deref().unwrap_or(""));
    out.push('\n');
    out
}

/// Concatenates every record into the plaintext digest.
pub fn digest(results: &[ProbeResult]) -> String {
    results.iter().map(record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;

    fn success() -> ProbeResult {
        ProbeResult {
            position: 0,
            scheme: "http".to_string(),
            host: "example.com".to_string(),
            path: "/".to_string(),
            request_method: "HEAD".to_string(),
            request_dump: "HEAD / HTTP/1.1\r\nHost: example.com\r\n\r\n".to_string(),
            outcome: ProbeOutcome::Success,
            response_status: Some(200),
            response_dump: Some("HTTP/1.1 200 OK\r\n\r\n".to_string()),
        }
    }

    #[test]
    fn test_record_shape() {
        let text = record(&success());
        assert!(text.starts_with("///////////////////////////////\n"));
        assert!(text.contains("HEAD example.com => 200 [SUCCESS]\n"));
        assert!(text.contains("--------\n"));
        assert!(text.contains("HEAD / HTTP/1.1\r\n"));
        assert!(text.contains("HTTP/1.1 200 OK\r\n"));
    }

    #[test]
    fn test_failed_record_has_empty_status_and_no_response() {
        let mut result = success();
        result.outcome = ProbeOutcome::failure("connection refused");
        result.response_status = None;
        result.response_dump = None;

        let text = record(&result);
        assert!(text.contains("HEAD example.com =>  [FAIL: connection refused]\n"));
        assert!(!text.contains("HTTP/1.1 200"));
    }

    #[test]
    fn test_digest_concatenates_in_given_order() {
        let mut second = success();
        second.host = "other.test".to_string();

        let text = digest(&[success(), second]);
        let first_at = text.find("example.com").unwrap();
        let second_at = text.find("other.test").unwrap();
        assert!(first_at < second_at);
        assert_eq!(text.matches(BANNER).count(), 2);
    }
}
