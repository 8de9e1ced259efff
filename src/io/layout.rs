//! Fixed file layout of the raw results tree and the generated report tree

use std::path::{Path, PathBuf};

/// Child records produced by the test run, relative to the results root.
pub const CHILDREN_FILE: &str = "childrenObject.json";

/// Directory of per-test-case files under the results root.
pub const RESULTS_DATA_DIR: &str = "data";

/// Destination of the per-test-case files under the report root.
pub const TEST_CASES_DIR: &str = "data/test-cases";

/// Report files that receive the `children` field.
pub const REPORT_TARGETS: [&str; 4] = [
    "data/behaviors.json",
    "data/suites.json",
    "data/packages.json",
    "data/timeline.json",
];

/// Per-category widgets carrying `total` and `items[0].statistic`.
pub const CATEGORY_STATISTICS: [&str; 2] = ["widgets/suites.json", "widgets/behaviors.json"];

/// Summary widget carrying `reportName` and `statistic`.
pub const SUMMARY_STATISTICS: &str = "widgets/summary.json";

/// Custom UI assets: (source under results root, destination under report root).
pub const ASSETS: [(&str, &str); 4] = [
    ("app.js", "app.js"),
    ("styles.css", "styles.css"),
    ("logo.png", "logo.png"),
    (CHILDREN_FILE, "widgets/status-chart.json"),
];

/// Resolves the fixed relative paths against the two roots.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    report_dir: PathBuf,
    results_dir: PathBuf,
}

impl ReportLayout {
    pub fn new<R: AsRef<Path>, S: AsRef<Path>>(report_dir: R, results_dir: S) -> Self {
        Self {
            report_dir: report_dir.as_ref().to_path_buf(),
            results_dir: results_dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    #[must_use]
    pub fn report_path(&self, relative: &str) -> PathBuf {
        join_relative(&self.report_dir, relative)
    }

    #[must_use]
    pub fn results_path(&self, relative: &str) -> PathBuf {
        join_relative(&self.results_dir, relative)
    }

    #[must_use]
    pub fn children_source(&self) -> PathBuf {
        self.results_path(CHILDREN_FILE)
    }
}

// Relative paths are written with '/' so they read the same on every platform.
fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(base.to_path_buf(), |path, component| path.join(component))
}
