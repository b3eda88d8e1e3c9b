//! declutter - sort a directory's files into category folders
//!
//! This library scans a single directory (non-recursively), classifies each
//! file by its extension, and either reports the planned moves or moves every
//! file into an `images`, `documents`, `pdf`, `media`, `zips`, `programming`
//! or `other` subdirectory.

pub mod cli;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod file_category;
pub mod file_organizer;
pub mod logging;
pub mod output;
pub mod plan;
pub mod report;

pub use config::{ConfigError, DeclutterConfig};
pub use error::{Result, SortError};
pub use exclusion::ExclusionSet;
pub use file_category::{Category, Classifier, ExtensionCase, classify};
pub use file_organizer::{FailurePolicy, FileOrganizer, MoveReport};
pub use plan::{WorkingContext, build_target_path, scan_and_classify};
pub use report::DryRunReport;

pub use cli::{SortOptions, SortOutcome, run_cli, run_sort};
