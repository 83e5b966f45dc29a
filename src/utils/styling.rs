//! Terminal styling helpers

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::AnalysisConfig;

// Emoji icons with fallbacks for terminals that don't support them
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");

/// Print the configuration card shown before loading
pub fn print_config(config: &AnalysisConfig) {
    println!();
    println!("    {} {}", FOLDER, style("Configuration").cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      Input:      {}", truncate_path(&config.input, 38));
    println!("      Output dir: {}", truncate_path(&config.output_dir, 38));
    println!("      Plot dir:   {}", truncate_path(&config.plot_dir, 38));
    println!(
        "      Histogram:  {} bins, width {}",
        style(config.bins).yellow(),
        style(config.width).yellow()
    );
}

/// Print a line confirming where an artifact was written
pub fn print_saved(description: &str, path: &Path) {
    println!("{}{}: {}", SAVE, description, style(path.display()).green());
}

/// Print a run-ending diagnostic
pub fn print_error(message: &str) {
    println!("{} {}", style("Error:").red().bold(), message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("{}{}", CHART, style("Done.").green().bold());
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() <= max_len {
        path_str
    } else if max_len <= 3 {
        chars[chars.len() - max_len..].iter().collect()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
