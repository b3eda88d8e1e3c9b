//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output: colored status lines,
//! the move progress bar and per-category summary tables.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::file_category::Category;

/// Display width a filename is truncated to in tables.
pub const MAX_NAME_WIDTH: usize = 60;

/// Width of the filename cell including the trailing arrow.
const ARROW_CELL_WIDTH: usize = 70;

/// Manages all CLI output with consistent styling and formatting.
///
/// This struct provides methods for:
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Info messages (cyan)
/// - Progress bars for move runs
/// - Summary tables with per-category counts
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use declutter::output::OutputFormatter;
    /// OutputFormatter::success("Directory sorted");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a progress bar for moving `total` files.
    ///
    /// The bar draws to stderr and hides itself when stderr is not a terminal.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints a plain line without tearing the progress bar.
    pub fn progress_line(pb: &ProgressBar, message: &str) {
        pb.suspend(|| println!("{}", message));
    }

    /// Prints a table with file counts by category, in category order.
    ///
    /// Categories with no files are left out.
    ///
    /// ```no_run
    /// use declutter::file_category::Category;
    /// use declutter::output::OutputFormatter;
    ///
    /// OutputFormatter::summary_table(&[(Category::Images, 8), (Category::Pdf, 2)]);
    /// ```
    pub fn summary_table(category_counts: &[(Category, usize)]) {
        Self::header("SUMMARY");

        let rows: Vec<_> = category_counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .collect();
        let total_files: usize = rows.iter().map(|(_, count)| count).sum();

        let max_category_len = rows
            .iter()
            .map(|(category, _)| category.dir_name().len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in &rows {
            println!(
                "{:<width$} | {} {}",
                category.dir_name(),
                count.to_string().green(),
                file_word(*count),
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            file_word(total_files),
            width = max_category_len
        );
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }
}

fn file_word(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

/// Shortens `name` to `max_chars` characters followed by `...`.
///
/// Counts characters, not bytes, so multi-byte names never split mid-char.
pub fn ellipsis(name: &str, max_chars: usize) -> String {
    match name.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &name[..byte_index]),
        None => name.to_string(),
    }
}

/// Builds the dashed arrow that pads a filename cell to a fixed width.
pub fn arrow_for(name: &str) -> String {
    let arrow = "-->";
    let dashes = ARROW_CELL_WIDTH.saturating_sub(name.chars().count() + arrow.len());
    format!("{}{}", "-".repeat(dashes), arrow)
}
