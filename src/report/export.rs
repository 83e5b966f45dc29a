//! Output artifacts: text summary, histogram file, derived CSV and JSON export

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::pipeline::{
    render_histogram, AnalysisConfig, AnalysisOutcome, MissingReport, ScoredStudent,
    SubjectAverages, Subject, TopPerformer, AVERAGE_COLUMN, NAME_COLUMN, STUDY_HOURS_COLUMN,
};

use super::summary::render_results_text;

pub const RESULTS_FILE: &str = "results.txt";
pub const HISTOGRAM_FILE: &str = "score_distribution.txt";
pub const RESULTS_CSV_FILE: &str = "results_with_average.csv";
pub const RESULTS_JSON_FILE: &str = "results.json";

/// Header written above the histogram bars
pub const HISTOGRAM_HEADER: &str = "Score Distribution (Average per Student)";

/// Where each artifact of a run was written
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub results_text: PathBuf,
    pub histogram: PathBuf,
    pub results_csv: PathBuf,
    pub results_json: Option<PathBuf>,
}

/// Write a text file, creating its parent directory first
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Write the histogram of per-student averages with its fixed header
pub fn write_histogram(path: &Path, values: &[f64], bins: usize, width: usize) -> Result<()> {
    let text = format!(
        "{}\n\n{}",
        HISTOGRAM_HEADER,
        render_histogram(values, bins, width)
    );
    save_text(path, &text)
}

/// Write each student's fields plus their average, all numbers to two decimals
pub fn write_results_csv(path: &Path, students: &[ScoredStudent], averages: &[f64]) -> Result<()> {
    let fmt = |values: Vec<f64>| -> Vec<String> {
        values.into_iter().map(|v| format!("{:.2}", v)).collect()
    };

    let mut columns = vec![Column::new(
        NAME_COLUMN.into(),
        students.iter().map(|s| s.name.clone()).collect::<Vec<String>>(),
    )];
    for subject in Subject::ALL {
        columns.push(Column::new(
            subject.column_name().into(),
            fmt(students.iter().map(|s| s.score(subject)).collect()),
        ));
    }
    columns.push(Column::new(
        STUDY_HOURS_COLUMN.into(),
        fmt(students.iter().map(|s| s.study_hours).collect()),
    ));
    columns.push(Column::new(AVERAGE_COLUMN.into(), fmt(averages.to_vec())));

    let mut df = DataFrame::new(columns)
        .context("Failed to assemble per-student results")?;

    ensure_parent_dir(path)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    pub scorecard_version: String,
    pub input_file: String,
    pub histogram_bins: usize,
    pub histogram_width: usize,
}

/// Headline statistics of the run
#[derive(Serialize)]
pub struct ResultsSummary {
    pub total_students: usize,
    pub skipped_rows: usize,
    pub class_average: f64,
    pub top_performer: Option<TopPerformer>,
    pub subject_averages: SubjectAverages,
    /// `null` when the correlation is undefined
    pub correlation: Option<f64>,
}

/// One student row in the export
#[derive(Serialize)]
pub struct StudentEntry<'a> {
    #[serde(flatten)]
    pub student: &'a ScoredStudent,
    pub average: f64,
}

/// Complete JSON export
#[derive(Serialize)]
pub struct ResultsExport<'a> {
    pub metadata: RunMetadata,
    pub summary: ResultsSummary,
    pub missing: &'a MissingReport,
    pub students: Vec<StudentEntry<'a>>,
}

impl<'a> ResultsExport<'a> {
    pub fn new(outcome: &'a AnalysisOutcome, config: &AnalysisConfig) -> Self {
        let stats = &outcome.statistics;
        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                scorecard_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: config.input.display().to_string(),
                histogram_bins: config.bins,
                histogram_width: config.width,
            },
            summary: ResultsSummary {
                total_students: stats.total_students,
                skipped_rows: outcome.skipped_rows,
                class_average: stats.class_average,
                top_performer: stats.top_performer.clone(),
                subject_averages: stats.subject_averages,
                correlation: stats.correlation,
            },
            missing: &outcome.missing,
            students: outcome
                .students
                .iter()
                .zip(&stats.student_averages)
                .map(|(student, &average)| StudentEntry { student, average })
                .collect(),
        }
    }
}

/// Serialize the full analysis to pretty-printed JSON
pub fn write_results_json(path: &Path, outcome: &AnalysisOutcome, config: &AnalysisConfig) -> Result<()> {
    let export = ResultsExport::new(outcome, config);
    let json = serde_json::to_string_pretty(&export).context("Failed to serialize results to JSON")?;
    save_text(path, &json)
}

/// Write every artifact configured for this run
pub fn write_reports(outcome: &AnalysisOutcome, config: &AnalysisConfig) -> Result<ArtifactPaths> {
    let stats = &outcome.statistics;

    let results_text = config.output_dir.join(RESULTS_FILE);
    save_text(&results_text, &render_results_text(stats))?;
    info!("Report saved: {}", results_text.display());

    let histogram = config.plot_dir.join(HISTOGRAM_FILE);
    write_histogram(&histogram, &stats.student_averages, config.bins, config.width)?;
    info!("Histogram saved: {}", histogram.display());

    let results_csv = config.output_dir.join(RESULTS_CSV_FILE);
    write_results_csv(&results_csv, &outcome.students, &stats.student_averages)?;
    info!("Dataset saved: {}", results_csv.display());

    let results_json = if config.export_json {
        let path = config.output_dir.join(RESULTS_JSON_FILE);
        write_results_json(&path, outcome, config)?;
        info!("JSON export saved: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(ArtifactPaths {
        results_text,
        histogram,
        results_csv,
        results_json,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
