// src/output/files.rs
// =============================================================================
// The per-target format: one raw-record file per result, so each target's
// full request/response exchange can be opened (or diffed) on its own.
//
// Layout:
//   <base>.manyheads-files/
//     example.com.http.mhdata
//     example.com.https.mhdata
//     ...
//
// File names are host.scheme, which is exactly the pair that distinguishes
// the two jobs a bare host expands into. Existing files are overwritten
// without confirmation, like every other output in this tool.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::probe::ProbeResult;

use super::text;

/// Writes one raw `.mhdata` file per result under `<base>.manyheads-files/`.
///
/// Any directory or file creation failure is fatal.
pub fn write_raw_files(results: &[ProbeResult], base: &str) -> Result<()> {
    let dir = PathBuf::from(format!("{}.manyheads-files", base));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;

    for result in results {
        let path = file_path(&dir, result);
        fs::write(&path, text::record(result))
            .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
    }

    Ok(())
}

fn file_path(dir: &Path, result: &ProbeResult) -> PathBuf {
    dir.join(format!("{}.{}.mhdata", result.host, result.scheme))
}
