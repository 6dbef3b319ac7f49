use chrono::{DateTime, Utc};
use evoplot_series::aggregate::AggregatedSeries;
use serde::Serialize;

/// Summary written next to the generation charts.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationsSummary {
    /// Timestamp when the summary was produced (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Number of runs aggregated
    pub runs: usize,
    /// Number of generations common to all runs
    pub generations: usize,
    /// One entry per aggregated series
    pub metrics: Vec<MetricSummary>,
}

/// Aggregated mean and standard deviation series for one measurement.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub metric: String,
    /// File name of the chart this series was rendered into
    pub chart: String,
    #[serde(flatten)]
    pub series: AggregatedSeries,
}

/// Summary written next to the cross-variant diversity chart.
#[derive(Debug, Clone, Serialize)]
pub struct DiversitySummary {
    pub generated_at: DateTime<Utc>,
    pub variants: Vec<VariantSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantSummary {
    pub label: String,
    /// Number of pooled samples behind the bar
    pub samples: usize,
    pub mean: f64,
    pub std_dev: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_summary_flattens_series() {
        let summary = MetricSummary {
            metric: "agent population".to_owned(),
            chart: "agent_amounts.png".to_owned(),
            series: AggregatedSeries {
                mean: vec![1.0],
                std_dev: vec![0.0],
            },
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["metric"], "agent population");
        assert_eq!(value["mean"][0], 1.0);
        assert_eq!(value["std_dev"][0], 0.0);
    }

    #[test]
    fn test_diversity_summary_shape() {
        let summary = DiversitySummary {
            generated_at: Utc::now(),
            variants: vec![VariantSummary {
                label: "Regular speciated MCC".to_owned(),
                samples: 4,
                mean: 2.5,
                std_dev: 0.5,
            }],
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["variants"][0]["samples"], 4);
        assert!(value["generated_at"].is_string());
    }
}
