//! Scanning a working directory into a per-category move plan.
//!
//! A [`WorkingContext`] is built once per run, populated once by
//! [`scan_and_classify`] and then consumed by either the dry-run report or the
//! executor.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, SortError};
use crate::exclusion::ExclusionSet;
use crate::file_category::{Category, Classifier};

/// A file found directly inside the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: OsString,
}

impl FileEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    /// Base filename, without any directory component.
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Filename for display and classification; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Target directory and assigned files for one category.
#[derive(Debug, Clone)]
pub struct CategoryPlan {
    category: Category,
    target: PathBuf,
    files: Vec<FileEntry>,
}

impl CategoryPlan {
    fn new(category: Category, target: PathBuf) -> Self {
        Self {
            category,
            target,
            files: Vec::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Absolute path of the category directory.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Files in scan order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Where `entry` ends up once moved.
    pub fn destination_of(&self, entry: &FileEntry) -> PathBuf {
        self.target.join(entry.name())
    }
}

/// Joins a category directory name onto the working directory.
///
/// Pure path arithmetic, the filesystem is not touched.
pub fn build_target_path(working_dir: &Path, category: Category) -> PathBuf {
    working_dir.join(category.dir_name())
}

/// All state for a single sort run.
#[derive(Debug, Clone)]
pub struct WorkingContext {
    working_dir: PathBuf,
    plans: [CategoryPlan; Category::COUNT],
    exclusions: ExclusionSet,
    classifier: Classifier,
}

impl WorkingContext {
    /// Resolves `dir` to an absolute path and prepares an empty plan for
    /// every category.
    ///
    /// The directory is not required to exist yet; that surfaces when it is
    /// scanned.
    pub fn new(dir: &Path, exclusions: ExclusionSet, classifier: Classifier) -> Result<Self> {
        let working_dir = std::path::absolute(dir).map_err(|source| SortError::InvalidPath {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self::with_absolute_dir(working_dir, exclusions, classifier))
    }

    fn with_absolute_dir(
        working_dir: PathBuf,
        exclusions: ExclusionSet,
        classifier: Classifier,
    ) -> Self {
        let plans = Category::ALL
            .map(|category| CategoryPlan::new(category, build_target_path(&working_dir, category)));
        Self {
            working_dir,
            plans,
            exclusions,
            classifier,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Plans in processing order, one per category.
    pub fn plans(&self) -> &[CategoryPlan] {
        &self.plans
    }

    pub fn plan(&self, category: Category) -> &CategoryPlan {
        &self.plans[category.index()]
    }

    pub fn is_excluded(&self, entry: &FileEntry) -> bool {
        self.exclusions.is_excluded(entry)
    }

    /// Current location of `entry` in the working directory.
    pub fn source_of(&self, entry: &FileEntry) -> PathBuf {
        self.working_dir.join(entry.name())
    }

    /// Classifies `entry` and appends it to its category's list.
    pub fn add_file(&mut self, entry: FileEntry) -> Category {
        let category = self.classifier.classify(&entry.display_name());
        trace!(file = %entry.display_name(), %category, "classified");
        self.plans[category.index()].files.push(entry);
        category
    }

    /// Total number of scanned files, excluded ones included.
    pub fn file_count(&self) -> usize {
        self.plans.iter().map(|plan| plan.files.len()).sum()
    }

    /// Number of files that a move would actually touch.
    pub fn movable_count(&self) -> usize {
        self.plans
            .iter()
            .flat_map(|plan| plan.files.iter())
            .filter(|entry| !self.is_excluded(entry))
            .count()
    }
}

/// Lists the working directory and assigns every non-directory entry to a
/// category.
///
/// Entries are processed in filename order so reports are reproducible.
/// Exclusions are not applied here; excluded files are still classified.
pub fn scan_and_classify(mut context: WorkingContext) -> Result<WorkingContext> {
    let dir = context.working_dir.clone();
    let read_error = |source: std::io::Error| SortError::DirectoryRead {
        path: dir.clone(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(&dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let file_type = entry.file_type().map_err(read_error)?;
        if file_type.is_dir() {
            trace!(dir = ?entry.file_name(), "skipping subdirectory");
            continue;
        }
        entries.push(FileEntry::new(entry.file_name()));
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        context.add_file(entry);
    }
    debug!(
        dir = %dir.display(),
        files = context.file_count(),
        "scanned working directory"
    );
    Ok(context)
}
