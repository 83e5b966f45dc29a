//! Scorecard: Student Performance Analysis Library
//!
//! Loads student marks from CSV, fills missing scores with subject means,
//! computes class statistics and a study-time correlation, and writes text,
//! CSV, JSON and ASCII histogram reports.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
