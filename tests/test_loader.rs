//! Unit tests for the student record loader

use scorecard::pipeline::{
    get_column_names, load_students, parse_number, required_columns, validate_columns,
    AnalyzerError,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_sample_csv() {
    let (_temp_dir, csv_path) = create_temp_csv(&sample_csv());

    let loaded = load_students(&csv_path).unwrap();

    let names: Vec<&str> = loaded.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Cara"], "Input order should be kept");
    assert_eq!(loaded.skipped_rows, 2, "Empty-name row and no-score row should be skipped");
}

#[test]
fn test_unparsable_score_becomes_absent() {
    let (_temp_dir, csv_path) = create_temp_csv(&sample_csv());

    let loaded = load_students(&csv_path).unwrap();
    let bob = &loaded.records[1];

    assert_eq!(bob.maths, Some(60.0));
    assert_eq!(bob.science, None, "'abc' should be treated as absent");
    assert_eq!(bob.english, Some(80.0));
    assert_eq!(bob.study_hours, 2.0);
}

#[test]
fn test_missing_study_hours_defaults_to_zero() {
    let (_temp_dir, csv_path) = create_temp_csv(&sample_csv());

    let loaded = load_students(&csv_path).unwrap();
    let cara = &loaded.records[2];

    assert_eq!(cara.name, "Cara");
    assert_eq!(cara.study_hours, 0.0);
}

#[test]
fn test_empty_name_row_dropped_regardless_of_scores() {
    let csv = format!("{}\n   ,99,99,99,9\nEve,50,50,50,1\n", HEADER);
    let (_temp_dir, csv_path) = create_temp_csv(&csv);

    let loaded = load_students(&csv_path).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].name, "Eve");
}

#[test]
fn test_name_is_trimmed() {
    let csv = format!("{}\n  Alice  ,90,80,70,5\n", HEADER);
    let (_temp_dir, csv_path) = create_temp_csv(&csv);

    let loaded = load_students(&csv_path).unwrap();

    assert_eq!(loaded.records[0].name, "Alice");
}

#[test]
fn test_extra_columns_ignored() {
    let csv = "Id,Name,Maths,Science,English,StudyHours,Notes\n\
               1,Alice,90,80,70,5,great\n";
    let (_temp_dir, csv_path) = create_temp_csv(csv);

    let loaded = load_students(&csv_path).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].maths, Some(90.0));
    assert_eq!(loaded.records[0].study_hours, 5.0);
}

#[test]
fn test_missing_column_is_schema_error() {
    let csv = "Name,Maths,Science,StudyHours\nAlice,90,80,5\n";
    let (_temp_dir, csv_path) = create_temp_csv(csv);

    let result = load_students(&csv_path);

    match result {
        Err(AnalyzerError::Schema { missing }) => {
            assert_eq!(missing, vec!["English".to_string()]);
        }
        other => panic!("Expected schema error, got {:?}", other),
    }
}

#[test]
fn test_schema_error_message_names_column() {
    let csv = "Name,Maths,Science,StudyHours\nAlice,90,80,5\n";
    let (_temp_dir, csv_path) = create_temp_csv(csv);

    let err = load_students(&csv_path).unwrap_err();

    assert!(err.is_recoverable());
    assert!(
        err.to_string().contains("English"),
        "Error message should name the missing column: {}",
        err
    );
}

#[test]
fn test_schema_error_message_quotes_columns() {
    let err = AnalyzerError::Schema {
        missing: vec!["English".to_string(), "StudyHours".to_string()],
    };

    assert_eq!(
        err.to_string(),
        "CSV missing required columns: ['English', 'StudyHours']"
    );
}

#[test]
fn test_row_with_extra_field_is_kept() {
    let csv = format!("{}\nAlice,90,80,70,5,extra\nBob,60,70,80,2\n", HEADER);
    let (_temp_dir, csv_path) = create_temp_csv(&csv);

    let loaded = load_students(&csv_path).unwrap();

    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[0].name, "Alice");
    assert_eq!(loaded.records[0].study_hours, 5.0, "Trailing field should be dropped");
    assert_eq!(loaded.records[1].english, Some(80.0));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut bytes = format!("{}\n", HEADER).into_bytes();
    bytes.extend_from_slice(b"Al\xffce,90,80,70,5\nBob,60,70,80,2\n");
    let (_temp_dir, csv_path) = create_temp_csv_bytes(&bytes);

    let loaded = load_students(&csv_path).unwrap();

    assert_eq!(loaded.records.len(), 2);
    assert!(loaded.records[0].name.starts_with("Al"));
    assert_eq!(loaded.records[0].maths, Some(90.0));
    assert_eq!(loaded.records[1].name, "Bob");
}

#[test]
fn test_unreadable_file_is_recoverable() {
    let err = AnalyzerError::Unreadable {
        path: "marks.csv".into(),
        reason: "bad quoting".to_string(),
    };

    assert!(err.is_recoverable());
    assert!(err.to_string().contains("marks.csv"));
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/marks.csv");

    let result = load_students(path);

    assert!(
        matches!(result, Err(AnalyzerError::NotFound { .. })),
        "Nonexistent file should return NotFound"
    );
}

#[test]
fn test_zero_byte_file_reports_all_columns_missing() {
    let (_temp_dir, csv_path) = create_temp_csv("");

    match load_students(&csv_path) {
        Err(AnalyzerError::Schema { missing }) => assert_eq!(missing.len(), 5),
        other => panic!("Expected schema error, got {:?}", other),
    }
}

#[test]
fn test_get_column_names() {
    let (_temp_dir, csv_path) = create_temp_csv(&sample_csv());

    let columns = get_column_names(&csv_path).unwrap();

    assert_eq!(columns, vec!["Name", "Maths", "Science", "English", "StudyHours"]);
}

#[test]
fn test_validate_columns_lists_every_missing_column() {
    let columns = vec!["Name".to_string(), "Science".to_string()];

    match validate_columns(&columns) {
        Err(AnalyzerError::Schema { missing }) => {
            assert_eq!(missing, vec!["Maths", "English", "StudyHours"]);
        }
        other => panic!("Expected schema error, got {:?}", other),
    }
}

#[test]
fn test_validate_columns_accepts_required_set() {
    let columns: Vec<String> = required_columns().iter().map(|c| c.to_string()).collect();
    assert!(validate_columns(&columns).is_ok());
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number(Some("42")), Some(42.0));
    assert_eq!(parse_number(Some(" 7.5 ")), Some(7.5));
    assert_eq!(parse_number(Some("-3")), Some(-3.0));
    assert_eq!(parse_number(Some("abc")), None);
    assert_eq!(parse_number(Some("")), None);
    assert_eq!(parse_number(Some("NaN")), None);
    assert_eq!(parse_number(Some("inf")), None);
    assert_eq!(parse_number(None), None);
}
