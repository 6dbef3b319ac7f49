use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use evoplot_chart::band;
use evoplot_series::{
    aggregate::{self, AggregatedSeries},
    collect,
    metrics::{self, SingleMetric, TripleMetric},
    run_log::RunLog,
};

use crate::{
    schema::{GenerationsSummary, MetricSummary},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerationsArg {
    /// Directory scanned recursively for per-run generation logs
    #[arg(long)]
    input_dir: PathBuf,
    /// Directory the PNG charts are written into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Summary JSON path (stdout when omitted)
    #[arg(long)]
    summary: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerationsArg) -> anyhow::Result<()> {
    let GenerationsArg {
        input_dir,
        output_dir,
        summary,
    } = arg;

    eprintln!("Loading run logs from {}...", input_dir.display());
    let runs = collect::load_runs(input_dir)
        .with_context(|| format!("failed to load runs from {}", input_dir.display()))?;
    let generations = runs.iter().map(RunLog::len).min().unwrap_or(0);
    eprintln!("Loaded {} runs x {generations} generations", runs.len());

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let mut metric_summaries = Vec::new();
    for metric in metrics::single_metrics() {
        metric_summaries.push(render_single(&runs, &metric, output_dir)?);
    }
    for metric in metrics::triple_metrics() {
        metric_summaries.extend(render_triple(&runs, &metric, output_dir)?);
    }

    let summary_data = GenerationsSummary {
        generated_at: Utc::now(),
        runs: runs.len(),
        generations,
        metrics: metric_summaries,
    };
    util::save_json(&summary_data, summary.as_deref())?;

    Ok(())
}

fn render_single(
    runs: &[RunLog],
    metric: &SingleMetric,
    output_dir: &Path,
) -> anyhow::Result<MetricSummary> {
    let series = aggregate_metric(runs, metric.name, metric.column)?;
    let path = output_dir.join(metric.file_name);
    band::draw_band_chart(&path, &series, metric.y_label, metric.y_range)?;
    eprintln!("Wrote {}", path.display());
    Ok(MetricSummary {
        metric: metric.name.to_owned(),
        chart: metric.file_name.to_owned(),
        series,
    })
}

fn render_triple(
    runs: &[RunLog],
    metric: &TripleMetric,
    output_dir: &Path,
) -> anyhow::Result<Vec<MetricSummary>> {
    let largest = aggregate_metric(runs, metric.name, metric.largest_column)?;
    let average = aggregate_metric(runs, metric.name, metric.avg_column)?;
    let smallest = aggregate_metric(runs, metric.name, metric.smallest_column)?;

    let path = output_dir.join(metric.file_name);
    band::draw_multi_band_chart(
        &path,
        metric.y_label,
        &[("max", &largest), ("avg", &average), ("min", &smallest)],
    )?;
    eprintln!("Wrote {}", path.display());

    let summaries = [
        ("largest", largest),
        ("average", average),
        ("smallest", smallest),
    ]
    .into_iter()
    .map(|(kind, series)| MetricSummary {
        metric: format!("{} ({kind})", metric.name),
        chart: metric.file_name.to_owned(),
        series,
    })
    .collect();
    Ok(summaries)
}

fn aggregate_metric(
    runs: &[RunLog],
    name: &str,
    column: usize,
) -> anyhow::Result<AggregatedSeries> {
    aggregate::aggregate_column(runs, column)
        .with_context(|| format!("failed to aggregate {name} (column {column})"))
}
