//! Cross-run aggregation: transpose per-run series and reduce each
//! generation to a mean and standard deviation.

use evoplot_stats::descriptive::SeriesStats;
use serde::Serialize;

use crate::run_log::{ParseLogError, RunLog};

/// Per-generation summary of one measurement across all runs.
///
/// Index `i` of both vectors describes generation `i`: `mean[i]` is the
/// average over all runs at that generation, `std_dev[i]` the sample
/// standard deviation of the same slice.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregatedSeries {
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
}

impl AggregatedSeries {
    /// Aligns `runs` by row index and reduces each index to summary
    /// statistics.
    ///
    /// Runs are truncated to the shortest one, so every aggregated
    /// generation is backed by a sample from every run.
    #[must_use]
    pub fn from_runs(runs: &[Vec<f64>]) -> Self {
        let steps = runs.iter().map(Vec::len).min().unwrap_or(0);
        let mut mean = Vec::with_capacity(steps);
        let mut std_dev = Vec::with_capacity(steps);
        for step in 0..steps {
            let slice = runs.iter().map(|run| run[step]);
            if let Some(stats) = SeriesStats::new(slice) {
                mean.push(stats.mean);
                std_dev.push(stats.std_dev);
            }
        }
        Self { mean, std_dev }
    }

    /// Number of aggregated generations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Mean plus one standard deviation, per generation.
    #[must_use]
    pub fn upper_band(&self) -> Vec<f64> {
        self.mean
            .iter()
            .zip(&self.std_dev)
            .map(|(m, s)| m + s)
            .collect()
    }

    /// Mean minus one standard deviation, per generation.
    #[must_use]
    pub fn lower_band(&self) -> Vec<f64> {
        self.mean
            .iter()
            .zip(&self.std_dev)
            .map(|(m, s)| m - s)
            .collect()
    }
}

/// Extracts `column` from every run and aggregates across runs per
/// generation.
pub fn aggregate_column(
    runs: &[RunLog],
    column: usize,
) -> Result<AggregatedSeries, ParseLogError> {
    let columns = runs
        .iter()
        .map(|run| run.column(column))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AggregatedSeries::from_runs(&columns))
}

/// Flattens `column` across every row of every run into a single dataset
/// and summarizes it.
///
/// This is the aggregation mode of the cross-variant comparison: rather
/// than tracking a value over generations, all samples of a variant are
/// pooled into one distribution.
pub fn pooled_stats(runs: &[RunLog], column: usize) -> Result<Option<SeriesStats>, ParseLogError> {
    let mut values = Vec::new();
    for run in runs {
        values.extend(run.column(column)?);
    }
    Ok(SeriesStats::from_values(&values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_runs_transposes_and_reduces() {
        let runs = vec![vec![1.0, 2.0, 3.0], vec![3.0, 4.0, 5.0]];
        let series = AggregatedSeries::from_runs(&runs);
        assert_eq!(series.mean, vec![2.0, 3.0, 4.0]);
        // Sample std dev of {1, 3} is sqrt(2)
        for sd in &series.std_dev {
            assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_runs_truncated_to_shortest() {
        let runs = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
        let series = AggregatedSeries::from_runs(&runs);
        assert_eq!(series.len(), 2);
        assert_eq!(series.mean, vec![2.0, 3.0]);
    }

    #[test]
    fn test_no_runs_yield_empty_series() {
        let series = AggregatedSeries::from_runs(&[]);
        assert!(series.is_empty());
    }

    #[test]
    fn test_single_run_has_zero_band_width() {
        let runs = vec![vec![5.0, 6.0]];
        let series = AggregatedSeries::from_runs(&runs);
        assert_eq!(series.std_dev, vec![0.0, 0.0]);
        assert_eq!(series.upper_band(), series.lower_band());
    }

    #[test]
    fn test_bands_offset_by_std_dev() {
        let series = AggregatedSeries {
            mean: vec![10.0, 20.0],
            std_dev: vec![1.0, 2.0],
        };
        assert_eq!(series.upper_band(), vec![11.0, 22.0]);
        assert_eq!(series.lower_band(), vec![9.0, 18.0]);
    }

    fn run(text: &str) -> RunLog {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.txt");
        std::fs::write(&path, text).unwrap();
        RunLog::from_path(&path).unwrap()
    }

    #[test]
    fn test_aggregate_column_across_logs() {
        let runs = vec![run("0 10\n1 20\n"), run("0 30\n1 40\n")];
        let series = aggregate_column(&runs, 1).unwrap();
        assert_eq!(series.mean, vec![20.0, 30.0]);
    }

    #[test]
    fn test_pooled_stats_flattens_all_rows() {
        let runs = vec![run("1\n2\n"), run("3\n4\n")];
        let stats = pooled_stats(&runs, 0).unwrap().unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn test_pooled_stats_missing_column_fails() {
        let runs = vec![run("1 2\n"), run("3\n")];
        assert!(pooled_stats(&runs, 1).is_err());
    }
}
