// src/probe/http.rs
// =============================================================================
// Executes a single probe job against its target.
//
// The sequence for every job is fixed:
// 1. Build the outbound request (method token + target + User-Agent).
//    If that fails there is nothing to send - the job becomes a FAILURE
//    result without any network I/O.
// 2. Serialize the request into its HTTP/1.x wire form BEFORE sending,
//    so the dump exists even when the transport later fails.
// 3. Send it through the shared client.
// 4. Transport errors (DNS, connect, TLS, timeout) become FAILURE results
//    carrying the error text - they never abort the run.
// 5. Any received response is a SUCCESS: capture the status code and the
//    serialized status line + headers + body.
//
// reqwest does not hand us the literal socket bytes, so the dumps are
// reconstructed from the built Request and the received Response in
// HTTP/1.x wire form (request line / status line, headers, blank line,
// body).
//
// Rust concepts:
// - match on Result instead of ?: a failed probe is data, not an error
// - async fn + .await: the send and the body read both suspend the worker
// =============================================================================

use reqwest::{header, Client, Method, Request, Response, StatusCode};
use url::Url;

use super::model::{ProbeJob, ProbeOutcome, ProbeResult};

/// Runs one job to completion and produces its result.
///
/// This function never fails: every error mode is folded into a
/// `ProbeOutcome::Failure` on the returned record.
pub async fn execute(client: &Client, job: &ProbeJob) -> ProbeResult {
    let mut result = ProbeResult {
        position: job.position,
        scheme: job.target.scheme().to_string(),
        host: job.target.host_str().unwrap_or_default().to_string(),
        path: request_uri(&job.target),
        request_method: job.method.clone(),
        request_dump: String::new(),
        outcome: ProbeOutcome::Success,
        response_status: None,
        response_dump: None,
    };

    // Step 1: construction. A bad method token or an unusable target means
    // no network I/O at all.
    let request = match build_request(client, job) {
        Ok(request) => request,
        Err(reason) => {
            result.outcome = ProbeOutcome::failure(reason);
            return result;
        }
    };

    // Step 2: dump before send, so a later transport failure still leaves
    // us with the request we attempted.
    result.request_dump = dump_request(&request);

    // Step 3: the round trip.
    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            result.outcome = ProbeOutcome::failure(e.to_string());
            return result;
        }
    };

    // Step 5: capture. The status code is read before text() consumes the
    // response; a body that dies mid-read is a transport failure like any
    // other.
    let status = response.status().as_u16();
    match dump_response(response).await {
        Ok(dump) => {
            result.response_status = Some(status);
            result.response_dump = Some(dump);
        }
        Err(e) => {
            result.outcome = ProbeOutcome::failure(format!("error reading response: {}", e));
        }
    }

    result
}

// Builds the reqwest::Request for a job. Errors come back as plain strings
// because they only ever end up inside a Failure outcome.
fn build_request(client: &Client, job: &ProbeJob) -> Result<Request, String> {
    let method = Method::from_bytes(job.method.as_bytes())
        .map_err(|e| format!("invalid HTTP method '{}': {}", job.method, e))?;

    client
        .request(method, job.target.clone())
        .header(header::USER_AGENT, job.user_agent.as_str())
        .build()
        .map_err(|e| e.to_string())
}

/// Serializes a built request into its HTTP/1.x wire form.
pub fn dump_request(request: &Request) -> String {
    let mut dump = format!(
        "{} {} HTTP/1.1\r\n",
        request.method(),
        request_uri(request.url())
    );

    // Host goes first, like the transport sends it
    if let Some(host) = request.url().host_str() {
        match request.url().port() {
            Some(port) => dump.push_str(&format!("Host: {}:{}\r\n", host, port)),
            None => dump.push_str(&format!("Host: {}\r\n", host)),
        }
    }

    for (name, value) in request.headers() {
        dump.push_str(&format!(
            "{}: {}\r\n",
            name,
            value.to_str().unwrap_or("<non-ascii value>")
        ));
    }

    dump.push_str("\r\n");
    dump
}

// Serializes the response: status line, headers, blank line, body.
//
// Headers are walked before text() because text() consumes the response.
async fn dump_response(response: Response) -> reqwest::Result<String> {
    let mut dump = format!(
        "{} {}\r\n",
        version_label(response.version()),
        status_display(response.status())
    );

    for (name, value) in response.headers() {
        dump.push_str(&format!(
            "{}: {}\r\n",
            name,
            value.to_str().unwrap_or("<non-ascii value>")
        ));
    }
    dump.push_str("\r\n");

    // HEAD probes (the default) have no body, so this is usually empty
    let body = response.text().await?;
    dump.push_str(&body);

    Ok(dump)
}

/// Path plus query, the way it appears on the request line.
pub fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn status_display(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_string(),
    }
}

fn version_label(version: reqwest::Version) -> &'static str {
    match version {
        reqwest::Version::HTTP_09 => "HTTP/0.9",
        reqwest::Version::HTTP_10 => "HTTP/1.0",
        reqwest::Version::HTTP_11 => "HTTP/1.1",
        reqwest::Version::HTTP_2 => "HTTP/2.0",
        reqwest::Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}
