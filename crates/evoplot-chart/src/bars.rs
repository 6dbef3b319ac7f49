//! Bar charts with error-bar whiskers for cross-variant comparison.

use std::path::Path;

use evoplot_stats::descriptive::SeriesStats;
use plotters::prelude::*;

use crate::{CHART_HEIGHT, CHART_WIDTH, ChartError, DrawErr, ORANGE};

/// One bar: an experiment variant with its pooled summary statistics.
#[derive(Debug, Clone)]
pub struct VariantBar {
    pub label: String,
    pub stats: SeriesStats,
}

/// Renders one bar per variant, its height the pooled mean, with a black
/// whisker spanning one standard deviation either side and the rounded
/// mean printed above the bar.
pub fn draw_error_bar_chart(
    path: &Path,
    title: &str,
    y_label: &str,
    bars: &[VariantBar],
) -> Result<(), ChartError> {
    render_bars(path, title, y_label, bars).map_err(|source| ChartError::new(path, &source))
}

#[expect(clippy::cast_precision_loss)]
fn render_bars(
    path: &Path,
    title: &str,
    y_label: &str,
    bars: &[VariantBar],
) -> Result<(), DrawErr> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = bars.len().max(1) as f64;
    let y_max = top_of(bars);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len() + 1)
        .x_label_formatter(&|x| variant_label(bars, *x))
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 14))
        .draw()?;

    for (index, bar) in bars.iter().enumerate() {
        let x0 = index as f64;
        let color = bar_color(index, bars.len());
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x0 + 0.8, bar.stats.mean)],
            color.filled(),
        )))?;

        let center = x0 + 0.4;
        let spread = bar.stats.std_dev;
        chart.draw_series(std::iter::once(ErrorBar::new_vertical(
            center,
            bar.stats.mean - spread,
            bar.stats.mean,
            bar.stats.mean + spread,
            BLACK.filled(),
            10,
        )))?;

        chart.draw_series(std::iter::once(Text::new(
            format!("{:.3}", bar.stats.mean),
            (center, bar.stats.mean + y_max * 0.02),
            ("sans-serif", 15).into_font(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Y-axis ceiling: the tallest whisker tip plus headroom for the value
/// labels.
fn top_of(bars: &[VariantBar]) -> f64 {
    let top = bars
        .iter()
        .map(|bar| bar.stats.mean + bar.stats.std_dev)
        .fold(f64::NEG_INFINITY, f64::max);
    if top.is_finite() && top > 0.0 {
        top * 1.15
    } else {
        1.0
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn variant_label(bars: &[VariantBar], x: f64) -> String {
    bars.get(x.floor() as usize)
        .map(|bar| bar.label.clone())
        .unwrap_or_default()
}

/// First variant orange, last green, the rest blue.
fn bar_color(index: usize, total: usize) -> RGBColor {
    if index == 0 {
        ORANGE
    } else if index + 1 == total {
        GREEN
    } else {
        BLUE
    }
}
