//! Class-level descriptive statistics

use serde::Serialize;

use super::correlation::pearson_correlation;
use super::record::{ScoredStudent, Subject};

/// Best student by average score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub name: String,
    pub average: f64,
}

/// Mean score of each subject across the class
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SubjectAverages {
    pub maths: f64,
    pub science: f64,
    pub english: f64,
}

impl SubjectAverages {
    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Maths => self.maths,
            Subject::Science => self.science,
            Subject::English => self.english,
        }
    }

    /// `(subject, average)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, f64)> + '_ {
        Subject::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

/// Every statistic reported for a single run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    pub total_students: usize,
    pub class_average: f64,
    pub top_performer: Option<TopPerformer>,
    pub subject_averages: SubjectAverages,
    /// Per-student averages in input order
    pub student_averages: Vec<f64>,
    /// Correlation between study hours and student average, `None` when undefined
    pub correlation: Option<f64>,
}

impl ClassStatistics {
    pub fn compute(students: &[ScoredStudent]) -> Self {
        let student_averages: Vec<f64> = students.iter().map(student_average).collect();
        let study_hours: Vec<f64> = students.iter().map(|s| s.study_hours).collect();

        Self {
            total_students: students.len(),
            class_average: class_average(students),
            top_performer: top_performer(students),
            subject_averages: subject_averages(students),
            correlation: pearson_correlation(&study_hours, &student_averages),
            student_averages,
        }
    }
}

pub fn student_average(student: &ScoredStudent) -> f64 {
    student.average()
}

/// Mean of the per-student averages, `0.0` for an empty class
pub fn class_average(students: &[ScoredStudent]) -> f64 {
    mean(students.iter().map(student_average))
}

/// Student with the highest average; the earliest one wins a tie
pub fn top_performer(students: &[ScoredStudent]) -> Option<TopPerformer> {
    let mut best: Option<(&ScoredStudent, f64)> = None;

    for student in students {
        let average = student_average(student);
        match best {
            Some((_, best_average)) if average <= best_average => {}
            _ => best = Some((student, average)),
        }
    }

    best.map(|(student, average)| TopPerformer {
        name: student.name.clone(),
        average,
    })
}

pub fn subject_averages(students: &[ScoredStudent]) -> SubjectAverages {
    let subject_mean = |subject: Subject| mean(students.iter().map(|s| s.score(subject)));

    SubjectAverages {
        maths: subject_mean(Subject::Maths),
        science: subject_mean(Subject::Science),
        english: subject_mean(Subject::English),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
