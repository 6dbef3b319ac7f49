//! Time-series charts with shaded standard-deviation bands.

use std::path::Path;

use evoplot_series::{aggregate::AggregatedSeries, metrics::YRange};
use evoplot_stats::descriptive::SeriesStats;
use plotters::prelude::*;

use crate::{
    BAND_ALPHA, CHART_HEIGHT, CHART_WIDTH, ChartError, DrawErr, SERIES_COLORS, indexed,
    padded_span, x_span,
};

/// Renders one mean line over generations with a translucent band spanning
/// mean plus/minus one standard deviation.
pub fn draw_band_chart(
    path: &Path,
    series: &AggregatedSeries,
    y_label: &str,
    y_range: YRange,
) -> Result<(), ChartError> {
    render_band(path, series, y_label, y_range).map_err(|source| ChartError::new(path, &source))
}

/// Renders several labelled series into one chart, each with its own band,
/// with a legend in the upper left.
pub fn draw_multi_band_chart(
    path: &Path,
    y_label: &str,
    series: &[(&str, &AggregatedSeries)],
) -> Result<(), ChartError> {
    render_multi_band(path, y_label, series).map_err(|source| ChartError::new(path, &source))
}

/// The closed outline of a deviation band: the upper band left to right,
/// then the lower band right to left.
#[must_use]
pub fn band_polygon(series: &AggregatedSeries) -> Vec<(f64, f64)> {
    let mut points = indexed(&series.upper_band());
    points.extend(indexed(&series.lower_band()).into_iter().rev());
    points
}

fn render_band(
    path: &Path,
    series: &AggregatedSeries,
    y_label: &str,
    y_range: YRange,
) -> Result<(), DrawErr> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = resolve_y_range(series, y_range);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_span(series.len()), y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Generations")
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 14))
        .draw()?;

    let color = SERIES_COLORS[0];
    chart.draw_series(LineSeries::new(
        indexed(&series.mean),
        color.stroke_width(1),
    ))?;
    chart.draw_series(std::iter::once(Polygon::new(
        band_polygon(series),
        color.mix(BAND_ALPHA).filled(),
    )))?;

    root.present()?;
    Ok(())
}

fn render_multi_band(
    path: &Path,
    y_label: &str,
    series: &[(&str, &AggregatedSeries)],
) -> Result<(), DrawErr> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let steps = series.iter().map(|(_, s)| s.len()).max().unwrap_or(0);
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (_, s) in series {
        for value in s.lower_band() {
            lo = lo.min(value);
        }
        for value in s.upper_band() {
            hi = hi.max(value);
        }
    }
    let (y_min, y_max) = padded_span(lo, hi);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_span(steps), y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Generations")
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 14))
        .draw()?;

    for (index, (label, s)) in series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(indexed(&s.mean), color.stroke_width(1)))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1))
            });
        chart.draw_series(std::iter::once(Polygon::new(
            band_polygon(s),
            color.mix(BAND_ALPHA).filled(),
        )))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn resolve_y_range(series: &AggregatedSeries, y_range: YRange) -> (f64, f64) {
    match y_range {
        YRange::Fixed(lo, hi) => (lo, hi),
        // The axis spans exactly the extremes of the mean series; the band
        // may extend past it and is clipped.
        YRange::FromMeans => match SeriesStats::from_values(&series.mean) {
            Some(stats) if (stats.max - stats.min).abs() > f64::EPSILON => (stats.min, stats.max),
            Some(stats) => (stats.min - 0.5, stats.max + 0.5),
            None => (0.0, 1.0),
        },
    }
}
