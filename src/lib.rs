//! Allure Report Merge Library
//!
//! This library merges the custom child-test results of a test run into a
//! freshly generated Allure report: it injects the child records into the
//! report's tree files, bumps the pass/fail counters of the statistics widgets,
//! and copies the per-test-case files and custom UI assets into the report.
//!
//! Every output is computed and validated in memory before anything is written,
//! and all writes are joined before [`merge_report`] returns.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{ChildRecord, Outcome, Tally};

use io::json::{WIDGET_INDENT, read_json, read_text, to_indented_string};
use io::layout::{CATEGORY_STATISTICS, REPORT_TARGETS, ReportLayout, SUMMARY_STATISTICS};
use io::plan::{PlanReport, WritePlan};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::result;

/// Label written to `widgets/summary.json` when none is configured.
pub const DEFAULT_REPORT_NAME: &str = "Automation Test Report";

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Report {
        path: PathBuf,
        message: String,
    },
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::File { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Error::Json { path, source } => {
                write!(f, "Invalid JSON in {}: {source}", path.display())
            }
            Error::Report { path, message } => {
                write!(f, "Unexpected report content in {}: {message}", path.display())
            }
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::File { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
            Error::Report { .. } | Error::InvalidInput(_) => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// How the tally is applied to the statistics counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterMode {
    /// Add the tally to the existing counters. Running twice double-counts.
    #[default]
    Delta,
    /// Overwrite the counters with the tally. Running twice is a no-op.
    Absolute,
}

/// How the child records are placed into the report targets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InjectMode {
    /// Set `children` on the parsed root object.
    #[default]
    Structural,
    /// Splice a `children` member after the first line containing the marker.
    Marker(String),
}

/// Options for merging results into a report
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub report_dir: PathBuf,
    pub results_dir: PathBuf,
    pub report_name: String,
    pub counter_mode: CounterMode,
    pub inject_mode: InjectMode,
    pub dry_run: bool,
}

impl MergeOptions {
    pub fn new<R: AsRef<Path>, S: AsRef<Path>>(report_dir: R, results_dir: S) -> Self {
        Self {
            report_dir: report_dir.as_ref().to_path_buf(),
            results_dir: results_dir.as_ref().to_path_buf(),
            report_name: DEFAULT_REPORT_NAME.to_string(),
            counter_mode: CounterMode::default(),
            inject_mode: InjectMode::default(),
            dry_run: false,
        }
    }
}

/// Summary result from a merge operation
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub report_dir: String,
    pub tally: Tally,
    pub children: usize,
    /// Report targets that received the `children` field
    pub injected_targets: Vec<String>,
    pub test_cases: usize,
    pub planned_operations: usize,
    pub files_written: usize,
    pub files_copied: usize,
    pub bytes_written: u64,
    pub dry_run: bool,
}

fn require_dir(path: &Path, role: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::InvalidInput(format!(
            "{role} does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{role} is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Merge the raw results into the generated report
///
/// # Arguments
/// * `opts` - Report and results roots plus merge behavior
///
/// # Returns
/// A `MergeSummary` describing the tally and the files touched. Nothing is
/// written unless every input was read and validated successfully.
pub fn merge_report(opts: &MergeOptions) -> Result<MergeSummary> {
    require_dir(&opts.report_dir, "Report directory")?;
    require_dir(&opts.results_dir, "Results directory")?;
    if let InjectMode::Marker(marker) = &opts.inject_mode
        && marker.is_empty()
    {
        return Err(Error::InvalidInput("marker must not be empty".to_string()));
    }

    let layout = ReportLayout::new(&opts.report_dir, &opts.results_dir);
    let children = services::children::load_children(&layout.children_source())?;
    log::debug!("Loaded {} child records", children.len());

    let mut plan = WritePlan::new();

    let mut injected_targets = Vec::new();
    for target in REPORT_TARGETS {
        let path = layout.report_path(target);
        let text = read_text(&path)?;
        let injection =
            services::inject::inject_children(&path, &text, &children, &opts.inject_mode)?;
        if injection.injected {
            injected_targets.push(target.to_string());
        }
        plan.push_write(path, injection.contents);
    }

    let tally = services::children::tally(&children);
    log::info!(
        "Tally: {} passed, {} failed, {} ignored",
        tally.passed,
        tally.failed,
        tally.ignored
    );

    for target in CATEGORY_STATISTICS {
        let path = layout.report_path(target);
        let mut widget = read_json(&path)?;
        services::statistics::update_category(&path, &mut widget, &tally, opts.counter_mode)?;
        let contents = to_indented_string(&path, &widget, WIDGET_INDENT)?;
        plan.push_write(path, contents);
    }

    let summary_path = layout.report_path(SUMMARY_STATISTICS);
    let mut summary = read_json(&summary_path)?;
    services::statistics::update_summary(
        &summary_path,
        &mut summary,
        &tally,
        opts.counter_mode,
        &opts.report_name,
    )?;
    let contents = to_indented_string(&summary_path, &summary, WIDGET_INDENT)?;
    plan.push_write(summary_path, contents);

    let test_cases = services::assets::plan_test_cases(&layout, &mut plan)?;
    services::assets::plan_named_assets(&layout, &mut plan)?;

    let report = if opts.dry_run {
        log::info!("Dry run: {} operations planned, nothing written", plan.len());
        PlanReport::default()
    } else {
        let report = plan.execute()?;
        log::info!(
            "Merged into {}: {} written, {} copied",
            layout.report_dir().display(),
            report.written,
            report.copied
        );
        report
    };

    Ok(MergeSummary {
        report_dir: layout.report_dir().to_string_lossy().to_string(),
        tally,
        children: children.len(),
        injected_targets,
        test_cases,
        planned_operations: plan.len(),
        files_written: report.written,
        files_copied: report.copied,
        bytes_written: report.bytes,
        dry_run: opts.dry_run,
    })
}
