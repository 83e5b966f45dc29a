//! Scorecard: Student Performance Analyzer CLI
//!
//! Reads a CSV of student marks and writes a summary report, a per-student
//! CSV and an ASCII histogram of student averages.

use anyhow::Result;
use clap::Parser;

use scorecard::cli::Cli;
use scorecard::pipeline::{run_analysis, AnalyzerError};
use scorecard::report::{print_student_table, print_summary, write_reports};
use scorecard::utils::{
    create_spinner, finish_spinner, init_logging, print_completion, print_config, print_error,
    print_saved,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config();
    if cli.verbose {
        print_config(&config);
    }

    let spinner = create_spinner("Loading student records...");
    let analysis = run_analysis(&config);
    finish_spinner(&spinner);

    let outcome = match analysis {
        Ok(outcome) => outcome,
        Err(AnalyzerError::EmptyDataset) => {
            println!("{}", AnalyzerError::EmptyDataset);
            return Ok(());
        }
        Err(e) if e.is_recoverable() => {
            print_error(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stats = &outcome.statistics;
    print_summary(stats);
    if config.show_students {
        print_student_table(&outcome.students, &stats.student_averages);
    }

    let paths = write_reports(&outcome, &config)?;

    println!();
    print_saved("Results saved to", &paths.results_text);
    print_saved("ASCII histogram saved to", &paths.histogram);
    print_saved("Per-student CSV saved to", &paths.results_csv);
    if let Some(json) = &paths.results_json {
        print_saved("JSON export saved to", json);
    }

    print_completion();

    Ok(())
}
