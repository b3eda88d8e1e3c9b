//! Dry-run rendering of a scanned plan.
//!
//! Building a [`DryRunReport`] only reads the [`WorkingContext`]; nothing on
//! disk changes, so a report can be produced any number of times.

use std::fmt::Write as _;
use std::path::PathBuf;

use colored::*;
use serde::Serialize;

use crate::file_category::Category;
use crate::output::{MAX_NAME_WIDTH, arrow_for, ellipsis};
use crate::plan::WorkingContext;

/// Column gap between the two table columns.
const COLUMN_PADDING: usize = 4;

/// One file that a move run would relocate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub file: String,
    pub category: Category,
    pub target: PathBuf,
}

/// What a move run would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DryRunReport {
    pub working_dir: PathBuf,
    pub moves: Vec<PlannedMove>,
    pub excluded: Vec<String>,
}

impl DryRunReport {
    /// Walks every category in order and splits its files into moves and
    /// excluded names.
    pub fn from_context(context: &WorkingContext) -> Self {
        let mut moves = Vec::new();
        let mut excluded = Vec::new();

        for plan in context.plans() {
            for entry in plan.files() {
                let name = entry.display_name().into_owned();
                if context.is_excluded(entry) {
                    excluded.push(name);
                    continue;
                }
                moves.push(PlannedMove {
                    file: name,
                    category: plan.category(),
                    target: plan.target().to_path_buf(),
                });
            }
        }

        Self {
            working_dir: context.working_dir().to_path_buf(),
            moves,
            excluded,
        }
    }

    /// Counts of planned moves per category, in category order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .moves
                    .iter()
                    .filter(|planned| planned.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Renders the "File Name / New Directory" table followed by the
    /// excluded files section.
    pub fn render_table(&self) -> String {
        let rows: Vec<(String, String)> = self
            .moves
            .iter()
            .map(|planned| {
                let name = ellipsis(&planned.file, MAX_NAME_WIDTH);
                let cell = format!("{} {}", name, arrow_for(&name));
                (cell, planned.target.display().to_string())
            })
            .collect();

        let name_header = " File Name ";
        let name_rule = "-----------";
        let width = rows
            .iter()
            .map(|(cell, _)| cell.chars().count())
            .chain([name_header.len()])
            .max()
            .unwrap_or(0)
            + COLUMN_PADDING;

        let mut out = String::new();
        let _ = writeln!(out, "{:<width$}{}", name_header, " New Directory ");
        let _ = writeln!(out, "{:<width$}{}", name_rule, "---------------");
        for (cell, target) in &rows {
            let _ = writeln!(out, "{:<width$}{}", cell, target);
        }

        let _ = writeln!(out, "\n{}\n", "Excluded Files".bold());
        let _ = writeln!(out, " File Name");
        let _ = writeln!(out, "{}", name_rule);
        for name in &self.excluded {
            let _ = writeln!(out, "{}", ellipsis(name, MAX_NAME_WIDTH));
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
