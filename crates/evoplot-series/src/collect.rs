//! Recursive collection of run logs from a directory tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::run_log::{ParseLogError, RunLog};

/// Error raised while gathering run logs from a directory.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CollectError {
    /// Walking the directory tree failed.
    #[display("failed to scan {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },
    /// The tree contains no non-empty run logs.
    #[display("no run logs found under {}", root.display())]
    NoRuns { root: PathBuf },
    /// One of the files failed to parse.
    #[display("{source}")]
    Parse { source: ParseLogError },
}

/// Lists every regular file under `root`, sorted by path so run ordering
/// is deterministic across filesystems.
pub fn collect_run_files(root: &Path) -> Result<Vec<PathBuf>, CollectError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| CollectError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Walks `root` and parses every file found into a [`RunLog`].
///
/// Files that parse to zero rows are dropped. An empty result is an error:
/// aggregating nothing would silently produce empty charts.
pub fn load_runs(root: &Path) -> Result<Vec<RunLog>, CollectError> {
    let files = collect_run_files(root)?;
    let mut runs = Vec::with_capacity(files.len());
    for file in &files {
        let run = RunLog::from_path(file).map_err(|source| CollectError::Parse { source })?;
        if !run.is_empty() {
            runs.push(run);
        }
    }
    if runs.is_empty() {
        return Err(CollectError::NoRuns {
            root: root.to_path_buf(),
        });
    }
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_collect_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("run_b.txt"), "1 2\n").unwrap();
        fs::write(dir.path().join("nested").join("run_c.txt"), "3 4\n").unwrap();
        fs::write(dir.path().join("run_a.txt"), "5 6\n").unwrap();

        let files = collect_run_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["run_c.txt", "run_a.txt", "run_b.txt"]);
    }

    #[test]
    fn test_load_runs_parses_all_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("run_0.txt"), "0 1\n1 2\n").unwrap();
        fs::write(dir.path().join("run_1.txt"), "0 3\n1 4\n").unwrap();

        let runs = load_runs(dir.path()).unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|run| run.len() == 2));
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_runs(dir.path()).unwrap_err();
        assert!(matches!(err, CollectError::NoRuns { .. }));
    }

    #[test]
    fn test_empty_files_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.txt"), "\n").unwrap();
        fs::write(dir.path().join("run_0.txt"), "0 1\n").unwrap();

        let runs = load_runs(dir.path()).unwrap();
        assert_eq!(runs.len(), 1);
    }

    #[test]
    fn test_parse_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("run_0.txt"), "0 bad\n").unwrap();
        let err = load_runs(dir.path()).unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));
    }
}
