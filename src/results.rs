//! Raw-sample result files
//!
//! Each scenario's time series is written to its own flat file under the
//! results directory, one decimal millisecond value per line. The filename
//! encodes everything needed to tell runs apart: sample basename, blocking
//! pool size, scenario mode, and the no-page-cache marker.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result filename for one scenario:
/// `<basename(sample)>-<pool>-<"read"|"parse-and-read">[-no-page-cache]`
pub fn scenario_filename(
    sample_path: &Path,
    pool_size: &str,
    parse_and_read: bool,
    no_page_cache: bool,
) -> String {
    let base = sample_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mode = if parse_and_read {
        "parse-and-read"
    } else {
        "read"
    };
    let suffix = if no_page_cache { "-no-page-cache" } else { "" };

    format!("{base}-{pool_size}-{mode}{suffix}")
}

/// Writes a scenario's time series as newline-joined decimal text,
/// overwriting any previous file, and returns the written path.
///
/// The results directory is created on demand; an already-existing directory
/// is fine, any other creation error is fatal.
pub fn write_results(
    results_dir: &Path,
    sample_path: &Path,
    pool_size: &str,
    parse_and_read: bool,
    no_page_cache: bool,
    series: &[f64],
) -> Result<PathBuf> {
    match fs::create_dir(results_dir) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to create {}", results_dir.display()))
        }
    }

    let path = results_dir.join(scenario_filename(
        sample_path,
        pool_size,
        parse_and_read,
        no_page_cache,
    ));

    let body = series
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
