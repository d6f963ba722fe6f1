//! The four benchmark scenarios
//!
//! Cold scenarios drop the page cache before every timed batch; warm
//! scenarios run one untimed warm-up read first and never drop. Iterations
//! are strictly sequential, and any failure aborts the scenario.

use crate::cache::CacheDropper;
use crate::reader::read_batch;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Runs the benchmark scenarios against an injected cache dropper
pub struct Runner<'a> {
    dropper: &'a dyn CacheDropper,
}

impl<'a> Runner<'a> {
    pub fn new(dropper: &'a dyn CacheDropper) -> Self {
        Self { dropper }
    }

    /// Cold-cache read-only: {drop cache; timed batch read} per iteration
    pub async fn bench_read_cold(&self, paths: &[PathBuf], iterations: usize) -> Result<Vec<f64>> {
        println!("==== READ WITH NO PAGE CACHE ====");

        let mut times = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            self.dropper.drop_cache().context("dropping page cache")?;
            times.push(read_batch(paths, false).await?);
        }

        println!("{times:?}");
        Ok(times)
    }

    /// Warm-cache read-only: one untimed warm-up, then timed batch reads
    pub async fn bench_read_warm(&self, paths: &[PathBuf], iterations: usize) -> Result<Vec<f64>> {
        println!("==== READ WITH PAGE CACHE ====");
        self.warm_up(paths).await?;

        let mut times = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            times.push(read_batch(paths, false).await?);
        }

        println!("{times:?}");
        Ok(times)
    }

    /// Cold-cache read+parse: {drop cache; timed batch read+parse} per iteration
    pub async fn bench_read_parse_cold(
        &self,
        paths: &[PathBuf],
        iterations: usize,
    ) -> Result<Vec<f64>> {
        println!("==== READ AND PARSE WITH NO PAGE CACHE ====");

        let mut times = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            self.dropper.drop_cache().context("dropping page cache")?;
            times.push(read_batch(paths, true).await?);
        }

        println!("{times:?}");
        Ok(times)
    }

    /// Warm-cache read+parse: one untimed warm-up plain read, then timed
    /// batch read+parse iterations
    pub async fn bench_read_parse_warm(
        &self,
        paths: &[PathBuf],
        iterations: usize,
    ) -> Result<Vec<f64>> {
        println!("==== READ AND PARSE WITH PAGE CACHE ====");
        self.warm_up(paths).await?;

        let mut times = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            times.push(read_batch(paths, true).await?);
        }

        println!("{times:?}");
        Ok(times)
    }

    /// Untimed plain read to populate the page cache; the sample is discarded.
    async fn warm_up(&self, paths: &[PathBuf]) -> Result<()> {
        println!("Warm up cache");
        read_batch(paths, false).await?;
        println!("Start tests");
        Ok(())
    }
}
