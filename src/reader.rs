//! Timed concurrent batch reader
//!
//! One timed iteration reads every path in the batch concurrently: the read
//! futures are created in array order and joined as a group, so in-flight
//! concurrency equals the batch size. Parsing, when requested, runs inline as
//! soon as each read resolves; it is CPU-bound and does not yield.

use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Wall-clock duration as fractional milliseconds
fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs() as f64 * 1e3 + f64::from(elapsed.subsec_nanos()) / 1e6
}

/// Reads every path in `paths` concurrently, optionally parsing each file's
/// content as JSON, and returns the batch's elapsed wall-clock milliseconds.
///
/// Any read failure or malformed JSON fails the whole batch.
pub async fn read_batch(paths: &[PathBuf], parse: bool) -> Result<f64> {
    let start = Instant::now();

    let reads = paths.iter().map(|path| async move {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        if parse {
            let text = std::str::from_utf8(&bytes)
                .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
            serde_json::from_str::<serde_json::Value>(text)
                .with_context(|| format!("failed to parse {} as JSON", path.display()))?;
        }

        Ok::<(), anyhow::Error>(())
    });

    try_join_all(reads).await?;

    Ok(elapsed_ms(start.elapsed()))
}
