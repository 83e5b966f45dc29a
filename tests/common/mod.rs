//! Shared test utilities and fixture generators

#![allow(dead_code)]

use scorecard::pipeline::ScoredStudent;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header with every required column
pub const HEADER: &str = "Name,Maths,Science,English,StudyHours";

/// A small class with one gap in each kind of field:
/// - Bob has an unparsable Science score
/// - Cara has no StudyHours
/// - a row with an empty name
/// - a row with no usable subject score
pub fn sample_csv() -> String {
    [
        HEADER,
        "Alice,90,80,70,5",
        "Bob,60,abc,80,2",
        "Cara,70,75,80,",
        ",100,100,100,10",
        "Dan,x,,n/a,3",
    ]
    .join("\n")
        + "\n"
}

/// Write `contents` to `marks.csv` inside a fresh temporary directory
pub fn create_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("marks.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Write raw bytes (possibly not UTF-8) to `marks.csv` in a fresh directory
pub fn create_temp_csv_bytes(contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("marks.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Build a fully scored student
pub fn student(name: &str, maths: f64, science: f64, english: f64, study_hours: f64) -> ScoredStudent {
    ScoredStudent {
        name: name.to_string(),
        maths,
        science,
        english,
        study_hours,
    }
}

/// Generate a random class for stress tests
pub fn random_students(count: usize) -> Vec<ScoredStudent> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            student(
                &format!("student_{}", i),
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..12.0),
            )
        })
        .collect()
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "Expected {} (±{}), got {}",
        expected,
        tolerance,
        actual
    );
}
