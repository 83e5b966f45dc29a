//! Student record types

use serde::Serialize;

/// Name column header
pub const NAME_COLUMN: &str = "Name";

/// Study hours column header
pub const STUDY_HOURS_COLUMN: &str = "StudyHours";

/// Computed average column header in the derived CSV
pub const AVERAGE_COLUMN: &str = "StudentAverage";

/// The fixed set of scored subjects, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Maths,
    Science,
    English,
}

impl Subject {
    /// All subjects in column order.
    pub const ALL: [Subject; 3] = [Subject::Maths, Subject::Science, Subject::English];

    /// Column header used for this subject in input and output files.
    pub fn column_name(&self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::Science => "Science",
            Subject::English => "English",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Columns that must be present in the input header, in order.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![NAME_COLUMN];
    columns.extend(Subject::ALL.iter().map(|s| s.column_name()));
    columns.push(STUDY_HOURS_COLUMN);
    columns
}

/// A student row as loaded, before missing scores are filled
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub maths: Option<f64>,
    pub science: Option<f64>,
    pub english: Option<f64>,
    pub study_hours: f64,
}

impl StudentRecord {
    pub fn score(&self, subject: Subject) -> Option<f64> {
        match subject {
            Subject::Maths => self.maths,
            Subject::Science => self.science,
            Subject::English => self.english,
        }
    }

    /// True when at least one subject carries a value.
    pub fn has_any_score(&self) -> bool {
        Subject::ALL.iter().any(|&s| self.score(s).is_some())
    }
}

/// A student row with every subject score present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredStudent {
    pub name: String,
    pub maths: f64,
    pub science: f64,
    pub english: f64,
    pub study_hours: f64,
}

impl ScoredStudent {
    pub fn score(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Maths => self.maths,
            Subject::Science => self.science,
            Subject::English => self.english,
        }
    }

    /// Mean of the three subject scores.
    pub fn average(&self) -> f64 {
        (self.maths + self.science + self.english) / 3.0
    }
}
