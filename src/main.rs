use anyhow::{Context, Result};
use clap::Parser;
use pagebench::cache::ScriptCacheDropper;
use pagebench::cli::{Cli, POOL_SIZE_ENV};
use pagebench::fixtures::{self, FixturePreparer, ScriptFixturePreparer};
use pagebench::results;
use pagebench::runner::Runner;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: sudo PAGEBENCH_POOL_SIZE=N pagebench JSON_SAMPLE_PATH NUMBER_OF_READS";

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Build the single-threaded runtime, sizing the blocking I/O pool from the
/// concurrency environment variable when it holds a number.
fn build_runtime(pool_size: &str) -> Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_current_thread();
    builder.enable_all();

    if let Ok(threads) = pool_size.parse::<usize>() {
        if threads > 0 {
            builder.max_blocking_threads(threads);
        }
    }

    builder.build().context("failed to build tokio runtime")
}

async fn run(args: &Cli, sample_path: &Path, reads: usize, pool_size: &str) -> Result<()> {
    println!("PID: {}", std::process::id());
    tracing::debug!(
        reads,
        iterations = args.iterations,
        pool_size,
        "starting benchmark run"
    );

    ScriptFixturePreparer::new(&args.prepare_cmd)
        .prepare(sample_path, reads)
        .context("preparing sample fixtures")?;

    let paths = fixtures::sample_paths(&args.work_dir, reads);
    let dropper = ScriptCacheDropper::new(&args.drop_cache_cmd, !args.no_sudo);
    let runner = Runner::new(&dropper);
    let iterations = args.iterations;

    let series = runner.bench_read_cold(&paths, iterations).await?;
    results::write_results(&args.results_dir, sample_path, pool_size, false, true, &series)?;

    let series = runner.bench_read_warm(&paths, iterations).await?;
    results::write_results(&args.results_dir, sample_path, pool_size, false, false, &series)?;

    let series = runner.bench_read_parse_cold(&paths, iterations).await?;
    results::write_results(&args.results_dir, sample_path, pool_size, true, true, &series)?;

    let series = runner.bench_read_parse_warm(&paths, iterations).await?;
    results::write_results(&args.results_dir, sample_path, pool_size, true, false, &series)?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Both positionals are required for a run; without them, print usage and
    // exit cleanly.
    let (Some(sample_path), Some(reads)) = (args.sample_path.clone(), args.reads) else {
        println!("{USAGE}");
        return Ok(());
    };

    init_tracing(args.debug);

    let pool_size =
        std::env::var(POOL_SIZE_ENV).unwrap_or_else(|_| "default".to_string());

    let runtime = build_runtime(&pool_size)?;
    runtime.block_on(run(&args, &sample_path, reads, &pool_size))
}
