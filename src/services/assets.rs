//! Relocation of per-test-case files and custom UI assets into the report tree

use crate::io::layout::{ASSETS, RESULTS_DATA_DIR, ReportLayout, TEST_CASES_DIR};
use crate::io::plan::WritePlan;
use crate::{Error, Result};
use std::fs;

/// Plan a flat copy of every regular file in the results `data/` directory
/// into the report's `data/test-cases/`. Subdirectories are skipped.
///
/// Returns the number of files planned.
pub fn plan_test_cases(layout: &ReportLayout, plan: &mut WritePlan) -> Result<usize> {
    let source_dir = layout.results_path(RESULTS_DATA_DIR);
    let dest_dir = layout.report_path(TEST_CASES_DIR);

    let read_dir = fs::read_dir(&source_dir).map_err(|source| Error::File {
        path: source_dir.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| Error::File {
            path: source_dir.clone(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            log::debug!("Skipping non-file {}", path.display());
        }
    }
    files.sort();

    let count = files.len();
    for from in files {
        if let Some(name) = from.file_name() {
            let to = dest_dir.join(name);
            plan.push_copy(from, to);
        }
    }

    Ok(count)
}

/// Plan the copies of the named UI assets. Every source must exist.
pub fn plan_named_assets(layout: &ReportLayout, plan: &mut WritePlan) -> Result<usize> {
    for (source, destination) in ASSETS {
        let from = layout.results_path(source);
        if !from.is_file() {
            return Err(Error::File {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "asset not found"),
                path: from,
            });
        }
        plan.push_copy(from, layout.report_path(destination));
    }

    Ok(ASSETS.len())
}
