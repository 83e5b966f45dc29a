//! Missing score analysis and mean imputation

use serde::Serialize;
use tracing::debug;

use super::record::{ScoredStudent, StudentRecord, Subject};

/// Missing value summary for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectMissing {
    pub subject: Subject,
    pub missing_count: usize,
    /// Mean of the present values, `0.0` when none are present
    pub fill_value: f64,
}

/// Missing value summary for every subject, in subject order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingReport {
    pub subjects: Vec<SubjectMissing>,
}

impl MissingReport {
    pub fn total_missing(&self) -> usize {
        self.subjects.iter().map(|s| s.missing_count).sum()
    }

    pub fn fill_value(&self, subject: Subject) -> f64 {
        self.subjects
            .iter()
            .find(|s| s.subject == subject)
            .map(|s| s.fill_value)
            .unwrap_or(0.0)
    }
}

/// Count absent scores per subject and compute the mean used to fill them
pub fn analyze_missing_values(records: &[StudentRecord]) -> MissingReport {
    let subjects = Subject::ALL
        .iter()
        .map(|&subject| {
            let present: Vec<f64> = records.iter().filter_map(|r| r.score(subject)).collect();
            let fill_value = if present.is_empty() {
                0.0
            } else {
                present.iter().sum::<f64>() / present.len() as f64
            };

            SubjectMissing {
                subject,
                missing_count: records.len() - present.len(),
                fill_value,
            }
        })
        .collect();

    MissingReport { subjects }
}

/// Replace every absent subject score with that subject's mean.
///
/// Means are computed per subject over the records where it is present, so
/// filling one subject never influences another.
pub fn fill_missing_subjects(records: &[StudentRecord]) -> (Vec<ScoredStudent>, MissingReport) {
    let report = analyze_missing_values(records);

    for entry in report.subjects.iter().filter(|s| s.missing_count > 0) {
        debug!(
            "Filling {} missing {} score(s) with mean {:.2}",
            entry.missing_count, entry.subject, entry.fill_value
        );
    }

    let fill = |value: Option<f64>, subject: Subject| value.unwrap_or_else(|| report.fill_value(subject));

    let students = records
        .iter()
        .map(|r| ScoredStudent {
            name: r.name.clone(),
            maths: fill(r.maths, Subject::Maths),
            science: fill(r.science, Subject::Science),
            english: fill(r.english, Subject::English),
            study_hours: r.study_hours,
        })
        .collect();

    (students, report)
}
