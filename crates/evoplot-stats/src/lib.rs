//! Statistical building blocks for experiment log aggregation.
//!
//! This crate provides the descriptive statistics used when summarizing
//! repeated experiment runs:
//!
//! - **Descriptive statistics**: count, minimum, maximum, arithmetic mean,
//!   and sample standard deviation of a dataset
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ```
//! use evoplot_stats::descriptive::SeriesStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = SeriesStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```

pub mod descriptive;
