//! Student dataset loader for CSV files

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use super::error::{AnalyzerError, AnalyzerResult};
use super::record::{required_columns, StudentRecord, Subject, NAME_COLUMN, STUDY_HOURS_COLUMN};

/// Records that passed validation, plus how many rows were dropped
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub records: Vec<StudentRecord>,
    pub skipped_rows: usize,
}

/// Read the header of a CSV file without loading its rows
pub fn get_column_names(path: &Path) -> AnalyzerResult<Vec<String>> {
    ensure_readable(path)?;
    if is_empty_file(path)? {
        return Ok(Vec::new());
    }

    let schema = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_truncate_ragged_lines(true)
        .with_encoding(CsvEncoding::LossyUtf8)
        .finish()
        .and_then(|mut lf| lf.collect_schema())
        .map_err(|e| unreadable(path, e))?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Check that every required column is present in `columns`.
///
/// The error lists all missing columns in required order, not just the first.
pub fn validate_columns(columns: &[String]) -> AnalyzerResult<()> {
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|required| !columns.iter().any(|c| c == required))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnalyzerError::Schema { missing })
    }
}

/// Load student records from a CSV file.
///
/// Every column is read as text so that unparsable scores become absent
/// values instead of failing the whole file. Rows with an empty name, or
/// with no usable subject score, are dropped. Extra trailing fields are
/// ignored and invalid UTF-8 is replaced rather than rejected.
pub fn load_students(path: &Path) -> AnalyzerResult<LoadedDataset> {
    ensure_readable(path)?;
    if is_empty_file(path)? {
        validate_columns(&[])?;
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(
            CsvParseOptions::default()
                .with_truncate_ragged_lines(true)
                .with_encoding(CsvEncoding::LossyUtf8),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| unreadable(path, e))?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    validate_columns(&columns)?;

    let names = text_column(&df, NAME_COLUMN)?;
    let maths = text_column(&df, Subject::Maths.column_name())?;
    let science = text_column(&df, Subject::Science.column_name())?;
    let english = text_column(&df, Subject::English.column_name())?;
    let hours = text_column(&df, STUDY_HOURS_COLUMN)?;

    let mut dataset = LoadedDataset::default();
    let rows = names
        .into_iter()
        .zip(maths)
        .zip(science)
        .zip(english)
        .zip(hours);

    for (line, ((((name, m), s), e), h)) in rows.enumerate() {
        let name = name.map(str::trim).unwrap_or("");
        if name.is_empty() {
            debug!("Skipping row {}: empty name", line + 1);
            dataset.skipped_rows += 1;
            continue;
        }

        let record = StudentRecord {
            name: name.to_string(),
            maths: parse_number(m),
            science: parse_number(s),
            english: parse_number(e),
            study_hours: parse_number(h).unwrap_or(0.0),
        };

        if !record.has_any_score() {
            debug!("Skipping row {} ({}): no valid subject scores", line + 1, name);
            dataset.skipped_rows += 1;
            continue;
        }

        dataset.records.push(record);
    }

    debug!(
        "Loaded {} student(s), skipped {} row(s) from {}",
        dataset.records.len(),
        dataset.skipped_rows,
        path.display()
    );

    Ok(dataset)
}

/// Parse a text cell as a finite number; anything else is absent
pub fn parse_number(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> AnalyzerResult<&'a StringChunked> {
    Ok(df.column(name)?.as_materialized_series().str()?)
}

fn unreadable(path: &Path, err: PolarsError) -> AnalyzerError {
    AnalyzerError::Unreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn ensure_readable(path: &Path) -> AnalyzerResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AnalyzerError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

// Polars refuses a zero-byte CSV outright; treat it as a file with no header.
fn is_empty_file(path: &Path) -> AnalyzerResult<bool> {
    Ok(std::fs::metadata(path)?.len() == 0)
}
