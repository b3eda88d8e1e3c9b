//! Command-line interface module for declutter.
//!
//! This module handles:
//! - Argument parsing
//! - Merging flags with the configuration file
//! - Orchestrating scan, report and move for the `sort` command

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::config::DeclutterConfig;
use crate::error::{Result, SortError};
use crate::exclusion::ExclusionSet;
use crate::file_category::{Classifier, ExtensionCase};
use crate::file_organizer::{FailurePolicy, FileOrganizer, MoveReport};
use crate::output::OutputFormatter;
use crate::plan::{WorkingContext, scan_and_classify};
use crate::report::DryRunReport;

/// declutter - sort a directory's files into folders by extension
#[derive(Debug, Parser)]
#[command(name = "declutter", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true, env = "DECLUTTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean directory files
    #[command(
        visible_alias = "s",
        long_about = "Clean the given directory's files into folders based on their extension"
    )]
    Sort(SortArgs),
    /// Print the declutter version number
    #[command(visible_alias = "v")]
    Version,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Directory whose files should be sorted
    pub dir: PathBuf,

    /// Show what would be moved without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Leave this exact filename in place (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Match extensions regardless of case
    #[arg(long)]
    pub ignore_case: bool,

    /// Keep moving remaining files after a move fails
    #[arg(long)]
    pub keep_going: bool,

    /// Dry-run output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved inputs for one sort run.
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    pub dir: PathBuf,
    pub dry_run: bool,
    pub exclusions: ExclusionSet,
    pub case: ExtensionCase,
    pub policy: FailurePolicy,
    pub format: ReportFormat,
}

impl SortOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }
}

impl SortArgs {
    /// Merges flags with configured defaults. A flag can switch an option on
    /// but not off; exclusions from both sources are combined.
    pub fn into_options(self, config: &DeclutterConfig) -> SortOptions {
        let mut exclusions: ExclusionSet = config.sort.exclude.iter().cloned().collect();
        exclusions.extend(self.exclude);

        let case = if self.ignore_case || config.sort.ignore_case {
            ExtensionCase::Insensitive
        } else {
            ExtensionCase::Sensitive
        };
        let policy = if self.keep_going || config.sort.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        };

        SortOptions {
            dir: self.dir,
            dry_run: self.dry_run,
            exclusions,
            case,
            policy,
            format: self.format,
        }
    }
}

/// Result of a successful sort run.
#[derive(Debug)]
pub enum SortOutcome {
    Reported(DryRunReport),
    Executed(MoveReport),
}

/// Runs the parsed command line.
pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sort(args) => {
            let config = DeclutterConfig::load(cli.config.as_deref())?;
            let options = args.into_options(&config);
            debug!(?options, "resolved sort options");
            run_sort(&options).map(|_| ())
        }
        Commands::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Scans `options.dir` and either reports or performs the moves.
///
/// # Examples
///
/// ```no_run
/// use declutter::cli::{SortOptions, run_sort};
///
/// let mut options = SortOptions::new("/path/to/Downloads");
/// options.dry_run = true;
/// run_sort(&options)?;
/// # Ok::<(), declutter::SortError>(())
/// ```
pub fn run_sort(options: &SortOptions) -> Result<SortOutcome> {
    let context = WorkingContext::new(
        &options.dir,
        options.exclusions.clone(),
        Classifier::new(options.case),
    )
    .and_then(scan_and_classify)?;

    if options.dry_run {
        let report = DryRunReport::from_context(&context);
        print_dry_run(&report, options.format)?;
        return Ok(SortOutcome::Reported(report));
    }

    OutputFormatter::info(&format!(
        "Organizing contents of: {}",
        context.working_dir().display()
    ));
    let report = FileOrganizer::execute(&context, options.policy)?;
    OutputFormatter::summary_table(&report.category_counts());

    if !report.is_complete() {
        return Err(SortError::PartialFailure {
            failed: report.failures.len(),
            moved: report.moved.len(),
        });
    }
    OutputFormatter::success(&format!("Moved {} file(s)", report.moved.len()));
    Ok(SortOutcome::Executed(report))
}

fn print_dry_run(report: &DryRunReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => OutputFormatter::plain(&report.to_json()?),
        ReportFormat::Text => {
            OutputFormatter::dry_run_notice("Dry run mode");
            OutputFormatter::plain("");
            print!("{}", report.render_table());
            OutputFormatter::summary_table(&report.category_counts());
            OutputFormatter::success("Dry run complete. No files were modified.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sort_with_flags() {
        let cli = Cli::try_parse_from([
            "declutter",
            "sort",
            "downloads",
            "--dry-run",
            "--exclude",
            "a.txt",
            "--exclude",
            "b.txt",
        ])
        .expect("Failed to parse");

        let Commands::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(args.dir, PathBuf::from("downloads"));
        assert!(args.dry_run);
        assert_eq!(args.exclude, vec!["a.txt", "b.txt"]);
        assert_eq!(args.format, ReportFormat::Text);
    }

    #[test]
    fn test_sort_alias_and_defaults() {
        let cli = Cli::try_parse_from(["declutter", "s", "."]).expect("Failed to parse");
        let Commands::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert!(!args.dry_run);
        assert!(args.exclude.is_empty());
        assert!(!args.keep_going);
    }

    #[test]
    fn test_sort_requires_directory() {
        assert!(Cli::try_parse_from(["declutter", "sort"]).is_err());
        assert!(Cli::try_parse_from(["declutter", "sort", "a", "b"]).is_err());
    }

    #[test]
    fn test_usage_error_code_differs_from_sort_errors() {
        let err = Cli::try_parse_from(["declutter", "sort", "--no-such-flag", "."]).unwrap_err();
        let read = SortError::DirectoryRead {
            path: PathBuf::from("/missing"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 2);
        assert_ne!(i32::from(read.exit_code()), err.exit_code());
    }

    #[test]
    fn test_version_alias() {
        let cli = Cli::try_parse_from(["declutter", "v"]).expect("Failed to parse");
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_into_options_merges_config() {
        let args = SortArgs {
            dir: PathBuf::from("x"),
            dry_run: false,
            exclude: vec!["flag.txt".to_string()],
            ignore_case: false,
            keep_going: false,
            format: ReportFormat::Text,
        };
        let mut config = DeclutterConfig::default();
        config.sort.exclude = vec!["config.txt".to_string()];
        config.sort.keep_going = true;

        let options = args.into_options(&config);
        assert_eq!(options.exclusions.len(), 2);
        assert_eq!(options.policy, FailurePolicy::KeepGoing);
        assert_eq!(options.case, ExtensionCase::Sensitive);
    }

    #[test]
    fn test_into_options_flag_enables_ignore_case() {
        let args = SortArgs {
            dir: PathBuf::from("x"),
            dry_run: true,
            exclude: Vec::new(),
            ignore_case: true,
            keep_going: false,
            format: ReportFormat::Json,
        };
        let options = args.into_options(&DeclutterConfig::default());
        assert_eq!(options.case, ExtensionCase::Insensitive);
        assert_eq!(options.policy, FailurePolicy::FailFast);
        assert!(options.dry_run);
    }
}
