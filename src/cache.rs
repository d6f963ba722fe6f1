//! Page-cache control via an external privileged script
//!
//! Dropping the OS page cache requires root, so the harness shells out to a
//! small script (through `sudo` by default) instead of touching
//! `/proc/sys/vm/drop_caches` itself. The capability is a trait so scenario
//! logic can be exercised without root in tests.

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Errors from the external collaborator scripts (cache drop, fixture prep)
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Runs a prepared command to completion, treating any non-zero exit as fatal.
pub(crate) fn run_checked(cmd: &mut Command, label: &str) -> Result<(), ScriptError> {
    let status = cmd.status().map_err(|source| ScriptError::Spawn {
        command: label.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(ScriptError::Failed {
            command: label.to_string(),
            status,
        });
    }

    Ok(())
}

/// Capability to flush the OS page cache before a cold-cache iteration
pub trait CacheDropper {
    fn drop_cache(&self) -> Result<(), ScriptError>;
}

/// Real implementation that invokes the configured drop script
#[derive(Debug)]
pub struct ScriptCacheDropper {
    script: PathBuf,
    sudo: bool,
}

impl ScriptCacheDropper {
    pub fn new(script: impl Into<PathBuf>, sudo: bool) -> Self {
        Self {
            script: script.into(),
            sudo,
        }
    }
}

impl CacheDropper for ScriptCacheDropper {
    fn drop_cache(&self) -> Result<(), ScriptError> {
        let mut cmd = if self.sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(&self.script);
            cmd
        } else {
            Command::new(&self.script)
        };

        run_checked(&mut cmd, &self.script.display().to_string())
    }
}
