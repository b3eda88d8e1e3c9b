//! Applying a scanned plan to the filesystem.
//!
//! Categories are processed in their fixed order. Each category directory is
//! created if missing, then every non-excluded file of that category is
//! renamed into it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, SortError};
use crate::file_category::Category;
use crate::output::OutputFormatter;
use crate::plan::{CategoryPlan, WorkingContext};

/// What to do when a single file cannot be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed move.
    #[default]
    FailFast,
    /// Record the failure and carry on with the remaining files.
    KeepGoing,
}

/// A file that was moved into its category directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Where the file was before the run.
    pub original_path: PathBuf,
    /// Where the file is now.
    pub new_path: PathBuf,
    pub category: Category,
}

/// A move that failed under [`FailurePolicy::KeepGoing`].
#[derive(Debug)]
pub struct MoveFailure {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
    pub error: io::Error,
}

/// Whether [`FileOrganizer::ensure_directory`] had to create the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyExists,
}

/// Everything a move run did.
#[derive(Debug, Default)]
pub struct MoveReport {
    pub created_dirs: Vec<PathBuf>,
    pub existing_dirs: Vec<PathBuf>,
    pub moved: Vec<Operation>,
    /// Names left in place because they were excluded.
    pub excluded: Vec<String>,
    pub failures: Vec<MoveFailure>,
}

impl MoveReport {
    /// Counts of moved files per category, in category order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .moved
                    .iter()
                    .filter(|op| op.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Moves files into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Materializes `context` on disk.
    ///
    /// Directory creation failures always abort the run. A failed file move
    /// aborts under [`FailurePolicy::FailFast`]; under
    /// [`FailurePolicy::KeepGoing`] it is recorded in the returned report.
    /// Moves already made are never rolled back.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use declutter::exclusion::ExclusionSet;
    /// use declutter::file_category::Classifier;
    /// use declutter::file_organizer::{FailurePolicy, FileOrganizer};
    /// use declutter::plan::{WorkingContext, scan_and_classify};
    /// use std::path::Path;
    ///
    /// let context = WorkingContext::new(Path::new("Downloads"), ExclusionSet::new(), Classifier::default())
    ///     .and_then(scan_and_classify)?;
    /// let report = FileOrganizer::execute(&context, FailurePolicy::FailFast)?;
    /// println!("moved {} files", report.moved.len());
    /// # Ok::<(), declutter::SortError>(())
    /// ```
    pub fn execute(context: &WorkingContext, policy: FailurePolicy) -> Result<MoveReport> {
        let mut report = MoveReport::default();
        let pb = OutputFormatter::create_progress_bar(context.movable_count() as u64);

        for plan in context.plans() {
            let (to_move, excluded): (Vec<_>, Vec<_>) = plan
                .files()
                .iter()
                .partition(|entry| !context.is_excluded(entry));
            report
                .excluded
                .extend(excluded.iter().map(|entry| entry.display_name().into_owned()));

            Self::prepare_category(plan, &pb, &mut report)?;

            for entry in to_move {
                let original_path = context.source_of(entry);
                let new_path = plan.destination_of(entry);
                OutputFormatter::progress_line(
                    &pb,
                    &format!(
                        "Moving file: {} --> {}",
                        original_path.display(),
                        new_path.display()
                    ),
                );

                match Self::move_file(&original_path, &new_path) {
                    Ok(()) => {
                        report.moved.push(Operation {
                            original_path,
                            new_path,
                            category: plan.category(),
                        });
                    }
                    Err(error) if policy == FailurePolicy::KeepGoing => {
                        warn!(file = %original_path.display(), %error, "move failed, continuing");
                        pb.suspend(|| {
                            OutputFormatter::error(&format!(
                                "Failed to move {}: {}",
                                original_path.display(),
                                error
                            ))
                        });
                        report.failures.push(MoveFailure {
                            original_path,
                            new_path,
                            error,
                        });
                    }
                    Err(source) => {
                        pb.abandon();
                        return Err(SortError::FileMove {
                            from: original_path,
                            to: new_path,
                            source,
                        });
                    }
                }
                pb.inc(1);
            }
        }

        pb.finish_and_clear();
        info!(
            moved = report.moved.len(),
            failed = report.failures.len(),
            excluded = report.excluded.len(),
            "move run finished"
        );
        Ok(report)
    }

    fn prepare_category(
        plan: &CategoryPlan,
        pb: &indicatif::ProgressBar,
        report: &mut MoveReport,
    ) -> Result<()> {
        let target = plan.target();
        if target.is_dir() {
            OutputFormatter::progress_line(
                pb,
                &format!("Directory already exists: {}", target.display()),
            );
        } else {
            OutputFormatter::progress_line(
                pb,
                &format!("Creating directory: {}", target.display()),
            );
        }

        match Self::ensure_directory(target) {
            Ok(DirectoryStatus::Created) => report.created_dirs.push(target.to_path_buf()),
            Ok(DirectoryStatus::AlreadyExists) => report.existing_dirs.push(target.to_path_buf()),
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Creates `path` as a single directory level unless it already exists.
    ///
    /// The parent must exist. A non-directory already occupying `path` is an
    /// error.
    pub fn ensure_directory(path: &Path) -> Result<DirectoryStatus> {
        if path.is_dir() {
            debug!(dir = %path.display(), "category directory present");
            return Ok(DirectoryStatus::AlreadyExists);
        }
        fs::create_dir(path).map_err(|source| SortError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(dir = %path.display(), "created category directory");
        Ok(DirectoryStatus::Created)
    }

    /// Renames `from` to `to`, refusing to replace an existing file at `to`.
    pub fn move_file(from: &Path, to: &Path) -> io::Result<()> {
        if to.symlink_metadata().is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            ));
        }
        fs::rename(from, to)?;
        debug!(from = %from.display(), to = %to.display(), "moved file");
        Ok(())
    }
}
