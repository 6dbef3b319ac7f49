use std::path::PathBuf;

use anyhow::{Context, ensure};
use chrono::Utc;
use evoplot_chart::bars::{self, VariantBar};
use evoplot_series::{aggregate, collect};

use crate::{
    schema::{DiversitySummary, VariantSummary},
    util,
};

/// The column of a diversity log holding the per-generation score.
const DIVERSITY_COLUMN: usize = 0;

const DEFAULT_VARIANT_DIRS: [&str; 3] = [
    "regular_speciated_mcc_diversity",
    "varied_species_diversity",
    "species_replacement_diversity",
];

const DEFAULT_VARIANT_LABELS: [&str; 3] = [
    "Regular speciated MCC",
    "Varied size speciation",
    "Species replacement",
];

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DiversityArg {
    /// Variant directories, each pooled into one bar
    #[arg(long = "input-dir", default_values = DEFAULT_VARIANT_DIRS)]
    input_dirs: Vec<PathBuf>,
    /// Bar label per variant directory, in the same order
    #[arg(long = "label", default_values = DEFAULT_VARIANT_LABELS)]
    labels: Vec<String>,
    /// Output PNG path
    #[arg(long, default_value = "diversity.png")]
    output: PathBuf,
    /// Summary JSON path (stdout when omitted)
    #[arg(long)]
    summary: Option<PathBuf>,
}

pub(crate) fn run(arg: &DiversityArg) -> anyhow::Result<()> {
    let DiversityArg {
        input_dirs,
        labels,
        output,
        summary,
    } = arg;
    ensure!(
        input_dirs.len() == labels.len(),
        "{} input directories but {} labels",
        input_dirs.len(),
        labels.len()
    );

    let mut variant_bars = Vec::with_capacity(input_dirs.len());
    for (dir, label) in input_dirs.iter().zip(labels) {
        let runs = collect::load_runs(dir)
            .with_context(|| format!("failed to load runs from {}", dir.display()))?;
        let stats = aggregate::pooled_stats(&runs, DIVERSITY_COLUMN)
            .with_context(|| format!("failed to pool diversity scores from {}", dir.display()))?
            .with_context(|| format!("no diversity scores under {}", dir.display()))?;
        eprintln!("Pooled {} samples for {label}", stats.count);
        variant_bars.push(VariantBar {
            label: label.clone(),
            stats,
        });
    }

    bars::draw_error_bar_chart(output, "Diversity", "Diversity score", &variant_bars)?;
    eprintln!("Wrote {}", output.display());

    let summary_data = DiversitySummary {
        generated_at: Utc::now(),
        variants: variant_bars
            .iter()
            .map(|bar| VariantSummary {
                label: bar.label.clone(),
                samples: bar.stats.count,
                mean: bar.stats.mean,
                std_dev: bar.stats.std_dev,
            })
            .collect(),
    };
    util::save_json(&summary_data, summary.as_deref())?;

    Ok(())
}
