//! Counter updates for the statistics widgets

use crate::models::Tally;
use crate::{CounterMode, Error, Result};
use serde_json::Value;
use std::path::Path;

/// Update a per-category widget (`widgets/suites.json`, `widgets/behaviors.json`):
/// the top-level `total` and `items[0].statistic.{failed,passed,total}`.
pub fn update_category(
    path: &Path,
    widget: &mut Value,
    tally: &Tally,
    mode: CounterMode,
) -> Result<()> {
    apply_counter(path, widget, "total", tally.total(), mode)?;

    let statistic = widget
        .get_mut("items")
        .and_then(|items| items.get_mut(0))
        .and_then(|item| item.get_mut("statistic"))
        .ok_or_else(|| Error::Report {
            path: path.to_path_buf(),
            message: "missing items[0].statistic".to_string(),
        })?;

    apply_statistic(path, statistic, tally, mode)
}

/// Update `widgets/summary.json`: overwrite `reportName` and bump `statistic`.
pub fn update_summary(
    path: &Path,
    summary: &mut Value,
    tally: &Tally,
    mode: CounterMode,
    report_name: &str,
) -> Result<()> {
    let Value::Object(root) = summary else {
        return Err(Error::Report {
            path: path.to_path_buf(),
            message: "summary is not a JSON object".to_string(),
        });
    };
    root.insert("reportName".to_string(), Value::from(report_name));

    let statistic = root.get_mut("statistic").ok_or_else(|| Error::Report {
        path: path.to_path_buf(),
        message: "missing statistic".to_string(),
    })?;

    apply_statistic(path, statistic, tally, mode)
}

fn apply_statistic(
    path: &Path,
    statistic: &mut Value,
    tally: &Tally,
    mode: CounterMode,
) -> Result<()> {
    apply_counter(path, statistic, "failed", tally.failed, mode)?;
    apply_counter(path, statistic, "passed", tally.passed, mode)?;
    apply_counter(path, statistic, "total", tally.total(), mode)
}

fn apply_counter(
    path: &Path,
    object: &mut Value,
    key: &str,
    amount: u64,
    mode: CounterMode,
) -> Result<()> {
    let slot = object.get_mut(key).ok_or_else(|| Error::Report {
        path: path.to_path_buf(),
        message: format!("missing counter '{key}'"),
    })?;

    let current = slot.as_u64().ok_or_else(|| Error::Report {
        path: path.to_path_buf(),
        message: format!("counter '{key}' is not a non-negative integer: {slot}"),
    })?;

    *slot = Value::from(match mode {
        CounterMode::Delta => current.saturating_add(amount),
        CounterMode::Absolute => amount,
    });
    Ok(())
}
