//! Parsing of a single experiment run log.

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Error raised while reading or interpreting a run log.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseLogError {
    /// The file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A token in the file is not a float.
    #[display("{}:{line}: invalid float {token:?}", path.display())]
    InvalidFloat {
        path: PathBuf,
        line: usize,
        token: String,
        source: std::num::ParseFloatError,
    },
    /// A row does not reach the requested column.
    #[display("{}: row {row} has {found} columns, column {column} requested", path.display())]
    MissingColumn {
        path: PathBuf,
        row: usize,
        column: usize,
        found: usize,
    },
}

/// One parsed run log: a row of float measurements per generation.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
    rows: Vec<Vec<f64>>,
}

impl RunLog {
    /// Reads and parses the log at `path`.
    ///
    /// Every line is split on ASCII whitespace and each token parsed as an
    /// `f64`. Blank lines are skipped so a trailing newline does not produce
    /// an empty row.
    pub fn from_path(path: &Path) -> Result<Self, ParseLogError> {
        let text = fs::read_to_string(path).map_err(|source| ParseLogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    fn parse(path: &Path, text: &str) -> Result<Self, ParseLogError> {
        let mut rows = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<f64>()
                        .map_err(|source| ParseLogError::InvalidFloat {
                            path: path.to_path_buf(),
                            line: index + 1,
                            token: token.to_owned(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// The file this log was parsed from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of generations (rows) recorded in this run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extracts one column across all rows.
    ///
    /// Fails if any row is too short, naming the offending row.
    pub fn column(&self, column: usize) -> Result<Vec<f64>, ParseLogError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                row.get(column)
                    .copied()
                    .ok_or_else(|| ParseLogError::MissingColumn {
                        path: self.path.clone(),
                        row: index + 1,
                        column,
                        found: row.len(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<RunLog, ParseLogError> {
        RunLog::parse(Path::new("run_0.txt"), text)
    }

    #[test]
    fn test_parse_rows_and_columns() {
        let log = parse("0 10.5 3\n1 11.0 4\n2 12.5 5\n").unwrap();
        assert_eq!(log.path(), Path::new("run_0.txt"));
        assert_eq!(log.len(), 3);
        assert_eq!(log.column(1).unwrap(), vec![10.5, 11.0, 12.5]);
        assert_eq!(log.column(2).unwrap(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let log = parse("1 2\n\n3 4\n\n").unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_invalid_float_names_line_and_token() {
        let err = parse("1 2\n3 oops\n").unwrap_err();
        match err {
            ParseLogError::InvalidFloat { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_names_row() {
        let log = parse("1 2 3\n4 5\n").unwrap();
        let err = log.column(2).unwrap_err();
        match err {
            ParseLogError::MissingColumn { row, column, found, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, 2);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_display_includes_path() {
        let err = parse("abc\n").unwrap_err();
        assert!(err.to_string().contains("run_0.txt"));
    }
}
