//! Human-readable summaries of a class analysis

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{ClassStatistics, ScoredStudent, Subject};

/// Title line of the text report
pub const REPORT_TITLE: &str = "Student Performance Analyzer - Results";

const CORRELATION_LABEL: &str = "Correlation (StudyHours vs Average)";
const UNDEFINED_CORRELATION: &str = "Not defined (insufficient variation).";

/// Correlation line shared by the console and the text report
pub fn correlation_line(correlation: Option<f64>) -> String {
    match correlation {
        Some(r) => format!("{}: {:.2}", CORRELATION_LABEL, r),
        None => format!("{}: {}", CORRELATION_LABEL, UNDEFINED_CORRELATION),
    }
}

fn top_performer_line(stats: &ClassStatistics) -> String {
    match &stats.top_performer {
        Some(top) => format!("Top performer: {} ({:.2})", top.name, top.average),
        None => "Top performer: n/a".to_string(),
    }
}

/// Render the contents of `results.txt`
pub fn render_results_text(stats: &ClassStatistics) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", REPORT_TITLE));
    out.push_str(&format!("Total students: {}\n", stats.total_students));
    out.push_str(&format!("Class average: {:.2}\n", stats.class_average));
    out.push_str(&format!("{}\n\n", top_performer_line(stats)));
    out.push_str("Subject-wise averages:\n");
    for (subject, average) in stats.subject_averages.iter() {
        out.push_str(&format!("  {}: {:.2}\n", subject, average));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", correlation_line(stats.correlation)));
    out
}

/// Print the summary block to the console
pub fn print_summary(stats: &ClassStatistics) {
    println!();
    println!(
        "    {}",
        style("--- Student Performance Analyzer ---").cyan().bold()
    );
    println!();
    println!("Total students: {}", style(stats.total_students).yellow().bold());
    println!(
        "Class average (mean of student averages): {:.2}",
        stats.class_average
    );
    println!("{}", top_performer_line(stats));
    println!();
    println!("{}", style("Subject-wise averages:").white().bold());
    for (subject, average) in stats.subject_averages.iter() {
        println!("  {}: {:.2}", subject, average);
    }
    println!();
    match stats.correlation {
        Some(_) => println!("{}", correlation_line(stats.correlation)),
        None => println!("{}", style(correlation_line(None)).yellow()),
    }
}

/// Build a table with one row per student and their average
pub fn student_table(students: &[ScoredStudent], averages: &[f64]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("Name").add_attribute(Attribute::Bold)];
    header.extend(
        Subject::ALL
            .iter()
            .map(|s| Cell::new(s.column_name()).add_attribute(Attribute::Bold)),
    );
    header.push(Cell::new("Study Hours").add_attribute(Attribute::Bold));
    header.push(Cell::new("Average").add_attribute(Attribute::Bold));
    table.set_header(header);

    let best = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    for (student, &average) in students.iter().zip(averages) {
        let mut row = vec![Cell::new(&student.name)];
        row.extend(Subject::ALL.iter().map(|&s| {
            Cell::new(format!("{:.2}", student.score(s))).set_alignment(CellAlignment::Right)
        }));
        row.push(Cell::new(format!("{:.2}", student.study_hours)).set_alignment(CellAlignment::Right));

        let average_cell = Cell::new(format!("{:.2}", average)).set_alignment(CellAlignment::Right);
        row.push(if average == best {
            average_cell.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            average_cell
        });
        table.add_row(row);
    }

    table
}

/// Print the per-student table, indented like the rest of the output
pub fn print_student_table(students: &[ScoredStudent], averages: &[f64]) {
    println!();
    println!("{}", style("Per-student breakdown:").white().bold());
    for line in student_table(students, averages).to_string().lines() {
        println!("  {}", line);
    }
}
