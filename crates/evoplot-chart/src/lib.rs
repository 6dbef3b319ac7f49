//! PNG chart rendering for aggregated experiment series.
//!
//! Two chart families cover the catalog: time series over generations with
//! a shaded one-standard-deviation band ([`band`]), and per-variant bars
//! with error whiskers ([`bars`]).

use std::path::{Path, PathBuf};

use plotters::style::RGBColor;
use plotters::style::colors::{BLUE, CYAN, GREEN, MAGENTA};

pub mod band;
pub mod bars;

/// Pixel size of every rendered chart.
pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 480;

pub(crate) const BAND_ALPHA: f64 = 0.1;
pub(crate) const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Per-series line colors, cycled in drawing order.
pub(crate) const SERIES_COLORS: [RGBColor; 5] = [BLUE, ORANGE, GREEN, MAGENTA, CYAN];

pub(crate) type DrawErr = Box<dyn std::error::Error + Send + Sync>;

/// A chart could not be rendered to its output file.
///
/// The drawing backend errors are generic over the backend; they are
/// flattened to a message here so callers get one concrete type.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to render {}: {message}", path.display())]
pub struct ChartError {
    pub path: PathBuf,
    pub message: String,
}

impl ChartError {
    pub(crate) fn new(path: &Path, source: &DrawErr) -> Self {
        Self {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }
}

/// Widens `min..max` by 5% on both sides, with fallbacks for degenerate
/// and non-finite inputs.
#[must_use]
pub(crate) fn padded_span(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    (min - span * 0.05, max + span * 0.05)
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| (index as f64, *value))
        .collect()
}

/// Right edge of the x-axis for a series of `len` generations.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn x_span(len: usize) -> f64 {
    len.saturating_sub(1).max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_span_widens_both_sides() {
        let (lo, hi) = padded_span(0.0, 100.0);
        assert!((lo - -5.0).abs() < 1e-12);
        assert!((hi - 105.0).abs() < 1e-12);
    }

    #[test]
    fn test_padded_span_degenerate_range() {
        let (lo, hi) = padded_span(3.0, 3.0);
        assert!(lo < 3.0 && hi > 3.0);
    }

    #[test]
    fn test_padded_span_non_finite_falls_back() {
        assert_eq!(padded_span(f64::INFINITY, f64::NEG_INFINITY), (0.0, 1.0));
    }

    #[test]
    fn test_indexed_pairs_values_with_positions() {
        assert_eq!(indexed(&[5.0, 7.0]), vec![(0.0, 5.0), (1.0, 7.0)]);
    }

    #[test]
    fn test_x_span_never_collapses() {
        assert_eq!(x_span(0), 1.0);
        assert_eq!(x_span(1), 1.0);
        assert_eq!(x_span(100), 99.0);
    }
}
