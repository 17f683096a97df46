// src/jobs/source.rs
// =============================================================================
// The job source: turns the raw target list into an ordered Vec<ProbeJob>.
//
// Expansion rules (per input line):
// - "https://b.test/p"  -> one job, parsed as-is
// - "a.test"            -> two jobs: http://a.test then https://a.test
// - ""                  -> skipped (blank lines and whitespace)
//
// Positions are assigned densely in production order, so a bare host
// consumes two consecutive slots. Any line that cannot be parsed into a
// valid URL aborts the whole run before a single probe fires - a partial
// job list would silently skip targets, which is worse than stopping.
//
// Rust concepts:
// - Iterators over lines: no manual index bookkeeping
// - anyhow::Context: attach the file name / offending line to errors
// =============================================================================

use anyhow::{anyhow, Context, Result};
use std::fs;
use url::Url;

use crate::probe::ProbeJob;

/// Reads the target file and builds the full ordered job list.
///
/// Fatal on an unreadable file or any unparseable line.
pub fn load_jobs(path: &str, method: &str, user_agent: &str) -> Result<Vec<ProbeJob>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read target list '{}'", path))?;
    jobs_from_lines(content.lines(), method, user_agent)
}

/// Builds jobs from any source of lines (split out so tests don't need
/// files on disk).
pub fn jobs_from_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    method: &str,
    user_agent: &str,
) -> Result<Vec<ProbeJob>> {
    let mut jobs = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for target in expand_line(line)? {
            jobs.push(ProbeJob {
                // jobs.len() is the next dense position, no separate counter
                position: jobs.len(),
                target,
                method: method.to_string(),
                user_agent: user_agent.to_string(),
            });
        }
    }

    Ok(jobs)
}

// Expands one input line into its target URL(s).
//
// Only an explicit scheme prefix counts as "already a URL" - a bare host
// that merely *starts* with the letters "http" (say, an httpbin mirror)
// still gets the two-scheme expansion.
fn expand_line(line: &str) -> Result<Vec<Url>> {
    if line.starts_with("http://") || line.starts_with("https://") {
        let url = parse_target(line)?;
        Ok(vec![url])
    } else {
        // Bare host: probe both schemes, plain http first
        let http = parse_target(&format!("http://{}", line))?;
        let https = parse_target(&format!("https://{}", line))?;
        Ok(vec![http, https])
    }
}

fn parse_target(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|e| anyhow!("Invalid target '{}': {}", input, e))
}
