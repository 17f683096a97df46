// src/output/mod.rs
// =============================================================================
// This module renders the ordered result set into its output artifacts.
//
// Submodules:
// - json: the whole run as one structured JSON document
// - grep: one escaped single-line record per result
// - files: one raw .mhdata file per target
// - text: banner-delimited plaintext digest (also the per-file record shape)
//
// Every artifact shares one base name (mhoutput by default, or whatever
// --output-all was given) and overwrites whatever is already at its path.
// Formatters only ever *read* results - by the time we get here the run is
// complete and the set is final.
// =============================================================================

mod files;
mod grep;
mod json;
mod text;

use anyhow::{Context, Result};
use std::fs;

use crate::cli::Cli;
use crate::probe::ProbeResult;

/// Writes every artifact the CLI flags asked for.
///
/// Any file creation/write failure is fatal to the run.
pub fn write_outputs(results: &[ProbeResult], cli: &Cli) -> Result<()> {
    let base = cli.output_base();

    if cli.want_json() {
        write_file(&format!("{}.json", base), &json::render(results)?)?;
    }
    if cli.want_grep() {
        write_file(&format!("{}.grep", base), &grep::digest(results))?;
    }
    if cli.want_files() {
        files::write_raw_files(results, base)?;
        println!("Wrote {}.manyheads-files/ ({} files)", base, results.len());
    }
    if cli.want_text() {
        write_file(&format!("{}.manyheads", base), &text::digest(results))?;
    }

    Ok(())
}

// fs::write truncates/overwrites in one call - exactly the semantics we want
fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write output file '{}'", path))?;
    println!("Wrote {}", path);
    Ok(())
}
