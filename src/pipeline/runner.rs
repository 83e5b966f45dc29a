//! Pipeline entry point: load, impute and compute in one pass

use std::path::PathBuf;

use tracing::info;

use super::error::{AnalyzerError, AnalyzerResult};
use super::histogram::{DEFAULT_BINS, DEFAULT_WIDTH};
use super::loader::load_students;
use super::missing::{fill_missing_subjects, MissingReport};
use super::record::ScoredStudent;
use super::statistics::ClassStatistics;

/// Run configuration. Defaults mirror the conventional project layout.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Input CSV with one row per student
    pub input: PathBuf,
    /// Directory for the text summary, CSV and JSON outputs
    pub output_dir: PathBuf,
    /// Directory for the histogram file
    pub plot_dir: PathBuf,
    pub bins: usize,
    pub width: usize,
    /// Also write `results.json`
    pub export_json: bool,
    /// Print a per-student table to the console
    pub show_students: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/marks.csv"),
            output_dir: PathBuf::from("outputs"),
            plot_dir: PathBuf::from("plots"),
            bins: DEFAULT_BINS,
            width: DEFAULT_WIDTH,
            export_json: false,
            show_students: false,
        }
    }
}

/// Everything produced by a successful analysis
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Students after imputation, in input order
    pub students: Vec<ScoredStudent>,
    pub statistics: ClassStatistics,
    pub missing: MissingReport,
    pub skipped_rows: usize,
}

/// Load the configured input and compute all statistics.
///
/// Fails with [`AnalyzerError::EmptyDataset`] when no row survives loading.
pub fn run_analysis(config: &AnalysisConfig) -> AnalyzerResult<AnalysisOutcome> {
    let loaded = load_students(&config.input)?;
    if loaded.records.is_empty() {
        return Err(AnalyzerError::EmptyDataset);
    }

    let (students, missing) = fill_missing_subjects(&loaded.records);
    let statistics = ClassStatistics::compute(&students);

    info!(
        "Analyzed {} student(s); {} score(s) imputed",
        statistics.total_students,
        missing.total_missing()
    );

    Ok(AnalysisOutcome {
        students,
        statistics,
        missing,
        skipped_rows: loaded.skipped_rows,
    })
}
