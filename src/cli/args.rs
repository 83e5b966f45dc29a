//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::AnalysisConfig;

/// Scorecard - Summarize student performance from a CSV of marks
#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV with Name, Maths, Science, English and StudyHours columns
    #[arg(short, long, default_value = "data/marks.csv")]
    pub input: PathBuf,

    /// Directory for results.txt, results_with_average.csv and results.json
    #[arg(short, long, default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Directory for the score distribution histogram
    #[arg(long, default_value = "plots")]
    pub plot_dir: PathBuf,

    /// Number of histogram bins
    #[arg(long, default_value = "10", value_parser = validate_positive)]
    pub bins: usize,

    /// Width in characters of the longest histogram bar
    #[arg(long, default_value = "50", value_parser = validate_positive)]
    pub width: usize,

    /// Also export the full analysis as results.json
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Print a per-student table after the summary
    #[arg(long, default_value = "false")]
    pub show_students: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    /// Build the pipeline configuration from the parsed arguments.
    pub fn to_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            plot_dir: self.plot_dir.clone(),
            bins: self.bins,
            width: self.width,
            export_json: self.json,
            show_students: self.show_students,
        }
    }
}

/// Validator for bins and width
fn validate_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid whole number", s))?;

    if value == 0 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
