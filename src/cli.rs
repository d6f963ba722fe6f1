//! CLI argument parsing for Pagebench

use clap::Parser;
use std::path::PathBuf;

/// Environment variable sizing the blocking I/O pool. Its value is also
/// embedded in result filenames so runs with different pool sizes do not
/// overwrite each other.
pub const POOL_SIZE_ENV: &str = "PAGEBENCH_POOL_SIZE";

/// Default timed iterations per scenario
pub const DEFAULT_ITERATIONS: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "pagebench")]
#[command(version)]
#[command(about = "File-read and JSON-parse micro-benchmark under cold and warm page cache", long_about = None)]
pub struct Cli {
    /// JSON file used as the template for every fixture copy
    #[arg(value_name = "JSON_SAMPLE_PATH")]
    pub sample_path: Option<PathBuf>,

    /// Number of fixture files read concurrently per batch
    #[arg(value_name = "NUMBER_OF_READS")]
    pub reads: Option<usize>,

    /// Timed iterations per scenario
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Directory the fixture preparer fills with numbered sample copies
    #[arg(long = "work-dir", value_name = "DIR", default_value = "tmp")]
    pub work_dir: PathBuf,

    /// Directory result files are written into
    #[arg(long = "results-dir", value_name = "DIR", default_value = "tmp-results")]
    pub results_dir: PathBuf,

    /// Script that drops the OS page cache
    #[arg(
        long = "drop-cache-cmd",
        value_name = "PATH",
        default_value = "scripts/drop-cache.sh"
    )]
    pub drop_cache_cmd: PathBuf,

    /// Script that materializes the numbered fixture copies
    #[arg(
        long = "prepare-cmd",
        value_name = "PATH",
        default_value = "scripts/prepare-files.sh"
    )]
    pub prepare_cmd: PathBuf,

    /// Run the cache-drop script directly instead of through sudo
    #[arg(long = "no-sudo")]
    pub no_sudo: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
