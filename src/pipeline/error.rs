//! Error types for the analysis pipeline.
//!
//! Some failures end a run early without being treated as a crash: a missing
//! input file, a file polars cannot parse, a header without the required
//! columns, and a dataset that has no valid rows left after filtering. The
//! binary reports these as a plain diagnostic; every other failure propagates
//! as a fatal error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and analyzing a student dataset.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The input path does not exist.
    #[error("CSV not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// One or more required columns are missing from the header.
    #[error("CSV missing required columns: {}", quoted_list(.missing))]
    Schema { missing: Vec<String> },

    /// The file exists but could not be parsed as CSV.
    #[error("Could not read CSV {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// No row survived name and score validation.
    #[error("No valid student rows found in CSV.")]
    EmptyDataset,

    /// Polars failed to read or write a frame.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// Whether the run should end with a diagnostic rather than a failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalyzerError::NotFound { .. }
                | AnalyzerError::Schema { .. }
                | AnalyzerError::Unreadable { .. }
                | AnalyzerError::EmptyDataset
        )
    }
}

/// Render names as `['a', 'b']`
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Convenience alias used throughout the pipeline.
pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
