//! The catalog of charted measurements.
//!
//! A generation log row is a fixed layout of whitespace-delimited floats:
//!
//! | column | measurement                              |
//! |--------|------------------------------------------|
//! | 1      | agent population count                   |
//! | 2      | maze population count                    |
//! | 3-5    | maze dimensions (average, largest, smallest) |
//! | 6-8    | maze junctures (average, largest, smallest)  |
//! | 9-11   | agent connections (average, largest, smallest) |
//! | 15     | overall agent connection increase        |
//! | 16     | overall maze dimension increase          |
//! | 17     | overall maze juncture increase           |
//!
//! Column indices, axis labels, and output file names are fixed here; the
//! command line only selects the input and output directories.

/// How the y-axis of a chart is bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YRange {
    /// Fixed bounds, identical across runs of the tool.
    Fixed(f64, f64),
    /// Bounds derived from the extremes of the mean series.
    FromMeans,
}

/// A measurement charted as a single mean line with a deviation band.
#[derive(Debug, Clone)]
pub struct SingleMetric {
    pub name: &'static str,
    pub column: usize,
    pub y_label: &'static str,
    pub file_name: &'static str,
    pub y_range: YRange,
}

/// A measurement charted as overlaid largest/average/smallest lines.
#[derive(Debug, Clone)]
pub struct TripleMetric {
    pub name: &'static str,
    pub y_label: &'static str,
    pub file_name: &'static str,
    pub avg_column: usize,
    pub largest_column: usize,
    pub smallest_column: usize,
}

/// All single-line metrics, in rendering order.
#[must_use]
pub fn single_metrics() -> Vec<SingleMetric> {
    vec![
        SingleMetric {
            name: "agent population",
            column: 1,
            y_label: "Agent Amount",
            file_name: "agent_amounts.png",
            y_range: YRange::Fixed(0.0, 250.0),
        },
        SingleMetric {
            name: "maze population",
            column: 2,
            y_label: "Maze Amount",
            file_name: "maze_amounts.png",
            y_range: YRange::Fixed(0.0, 250.0),
        },
        SingleMetric {
            name: "maze dimension increase",
            column: 16,
            y_label: "Dimension Increase",
            file_name: "overall_maze_size_increases.png",
            y_range: YRange::FromMeans,
        },
        SingleMetric {
            name: "maze juncture increase",
            column: 17,
            y_label: "Junctures Amount Increase",
            file_name: "overall_maze_complexity_increases.png",
            y_range: YRange::FromMeans,
        },
        SingleMetric {
            name: "agent connection increase",
            column: 15,
            y_label: "Connections Increase",
            file_name: "overall_agent_size_increases.png",
            y_range: YRange::FromMeans,
        },
    ]
}

/// All largest/average/smallest metrics, in rendering order.
#[must_use]
pub fn triple_metrics() -> Vec<TripleMetric> {
    vec![
        TripleMetric {
            name: "maze dimensions",
            y_label: "Maze Dimensions",
            file_name: "avg_max_min_maze_sizes.png",
            avg_column: 3,
            largest_column: 4,
            smallest_column: 5,
        },
        TripleMetric {
            name: "agent connections",
            y_label: "Agent Connections",
            file_name: "avg_max_min_agent_sizes.png",
            avg_column: 9,
            largest_column: 10,
            smallest_column: 11,
        },
        TripleMetric {
            name: "maze junctures",
            y_label: "Maze Junctures",
            file_name: "avg_max_min_maze_complexities.png",
            avg_column: 6,
            largest_column: 7,
            smallest_column: 8,
        },
    ]
}
