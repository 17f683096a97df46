// src/output/grep.rs
// =============================================================================
// The greppable format: one line per result, fixed field order, so the
// whole run can be sliced with grep/awk/cut.
//
// Field order:
//   host // method // scheme // outcome // status // url // request // response //
//
// The raw dumps contain CRLFs, so they are flattened: every line break
// becomes the literal two characters `\n`. That keeps each record on
// exactly one physical line.
// =============================================================================

use crate::probe::ProbeResult;

/// Renders one result as a single greppable line (no trailing newline).
pub fn grep_line(result: &ProbeResult) -> String {
    format!(
        "{} // {} // {} // {} // {} // {} // {} // {} //",
        result.host,
        result.request_method,
        result.scheme,
        result.outcome.label(),
        result.status_display(),
        result.url(),
        single_line(&result.request_dump),
        single_line(result.response_dump.as_deref().unwrap_or(""))
    )
}

/// Renders the whole ordered set, one record per line.
pub fn digest(results: &[ProbeResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&grep_line(result));
        out.push('\n');
    }
    out
}

// Flattens CRLF and bare LF line breaks into literal `\n` escapes.
fn single_line(content: &str) -> String {
    content.replace("\r\n", "\\n").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;

    fn sample() -> ProbeResult {
        ProbeResult {
            position: 0,
            scheme: "https".to_string(),
            host: "example.com".to_string(),
            path: "/x".to_string(),
            request_method: "HEAD".to_string(),
            request_dump: "HEAD /x HTTP/1.1\r\nHost: example.com\r\n\r\n".to_string(),
            outcome: ProbeOutcome::Success,
            response_status: Some(301),
            response_dump: Some("HTTP/1.1 301 Moved Permanently\r\n\r\n".to_string()),
        }
    }

    #[test]
    fn test_single_line_escapes_both_line_ending_styles() {
        assert_eq!(single_line("a\r\nb\nc"), "a\\nb\\nc");
        assert_eq!(single_line("no breaks"), "no breaks");
    }

    #[test]
    fn test_record_is_one_physical_line() {
        let line = grep_line(&sample());
        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
    }

    #[test]
    fn test_field_order() {
        let line = grep_line(&sample());
        assert!(line.starts_with(
            "example.com // HEAD // https // SUCCESS // 301 // https://example.com/x // "
        ));
        assert!(line.ends_with(" //"));
    }

    #[test]
    fn test_failure_record_has_empty_fields_not_missing_fields() {
        let mut result = sample();
        result.outcome = ProbeOutcome::failure("dns error");
        result.response_status = None;
        result.response_dump = None;

        let line = grep_line(&result);
        // Still exactly eight `//`-terminated fields
        assert_eq!(line.matches(" // ").count(), 7);
        assert!(line.contains(" // FAIL: dns error // "));
    }

    #[test]
    fn test_digest_is_newline_delimited() {
        let text = digest(&[sample(), sample()]);
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("//\n"));
    }
}
