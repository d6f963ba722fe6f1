//! Sample-file fixtures for the benchmark
//!
//! The fixture preparer materializes `count` numbered copies of a base JSON
//! file into the work directory (`0.json` .. `(count-1).json`); the copies
//! are what every timed batch reads. Preparation happens exactly once, before
//! any scenario starts.

use crate::cache::{run_checked, ScriptError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Capability to materialize the numbered sample copies
pub trait FixturePreparer {
    fn prepare(&self, base: &Path, count: usize) -> Result<(), ScriptError>;
}

/// Real implementation that invokes the configured preparation script with
/// `(base_file, count)` arguments
#[derive(Debug)]
pub struct ScriptFixturePreparer {
    script: PathBuf,
}

impl ScriptFixturePreparer {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl FixturePreparer for ScriptFixturePreparer {
    fn prepare(&self, base: &Path, count: usize) -> Result<(), ScriptError> {
        let mut cmd = Command::new(&self.script);
        cmd.arg(base).arg(count.to_string());
        run_checked(&mut cmd, &self.script.display().to_string())
    }
}

/// Ordered path set for one run: `<work_dir>/0.json` .. `<work_dir>/(count-1).json`
pub fn sample_paths(work_dir: &Path, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|file_no| work_dir.join(format!("{file_no}.json")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn test_sample_paths_count_and_names() {
        let paths = sample_paths(Path::new("tmp"), 3);
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], Path::new("tmp/0.json"));
        assert_eq!(paths[1], Path::new("tmp/1.json"));
        assert_eq!(paths[2], Path::new("tmp/2.json"));
    }

    #[test]
    fn test_sample_paths_empty() {
        assert!(sample_paths(Path::new("tmp"), 0).is_empty());
    }

    #[test]
    fn test_script_preparer_runs_script_with_args() {
        let dir = TempDir::new().unwrap();
        let marker = dir.path().join("args.txt");
        let script = dir.path().join("prep.sh");
        fs::write(&script, format!("#!/bin/sh\necho \"$1 $2\" > {}\n", marker.display())).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let preparer = ScriptFixturePreparer::new(&script);
        preparer.prepare(Path::new("base.json"), 7).unwrap();

        let recorded = fs::read_to_string(&marker).unwrap();
        assert_eq!(recorded.trim(), "base.json 7");
    }

    #[test]
    fn test_script_preparer_fails_on_missing_script() {
        let dir = TempDir::new().unwrap();
        let preparer = ScriptFixturePreparer::new(dir.path().join("absent.sh"));
        let err = preparer.prepare(Path::new("base.json"), 1).unwrap_err();
        assert!(matches!(err, ScriptError::Spawn { .. }));
    }

    proptest! {
        #[test]
        fn prop_sample_paths_indexed_zero_to_count(count in 0usize..256) {
            let paths = sample_paths(Path::new("tmp"), count);
            prop_assert_eq!(paths.len(), count);
            for (file_no, path) in paths.iter().enumerate() {
                prop_assert_eq!(
                    path.file_name().unwrap().to_str().unwrap(),
                    format!("{file_no}.json")
                );
            }
        }
    }
}
