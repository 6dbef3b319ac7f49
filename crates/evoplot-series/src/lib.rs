//! Run-log loading and cross-run aggregation.
//!
//! Experiment runs write one log file each, holding one row of
//! whitespace-delimited floats per generation. This crate turns a directory
//! of such files into per-generation summary series:
//!
//! 1. [`collect`] walks the directory and parses every file into a
//!    [`run_log::RunLog`]
//! 2. [`aggregate`] aligns the runs by row index and reduces each
//!    generation to a mean and standard deviation
//! 3. [`metrics`] names the columns worth charting and the files the
//!    charts are written to

pub mod aggregate;
pub mod collect;
pub mod metrics;
pub mod run_log;
