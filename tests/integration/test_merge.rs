//! Integration test for a full merge with default options

use crate::fixtures::{LOGO_BYTES, create_merge_fixture, example_children};
use allure_merge::io::layout::REPORT_TARGETS;
use allure_merge::{DEFAULT_REPORT_NAME, MergeOptions, merge_report};
use std::fs;

#[test]
fn test_example_scenario_statistics() {
    let fixture = create_merge_fixture(&example_children());
    let opts = MergeOptions::new(&fixture.report, &fixture.results);

    let summary = merge_report(&opts).expect("merge");

    assert_eq!(summary.tally.passed, 1);
    assert_eq!(summary.tally.failed, 1);
    assert_eq!(summary.tally.ignored, 1);
    assert_eq!(summary.children, 3);

    // skipped record is not counted: total grows by 2, not 3
    assert_eq!(fixture.statistic("widgets/summary.json"), (3, 2, 5));
    assert_eq!(fixture.statistic("widgets/suites.json"), (3, 2, 5));
    assert_eq!(fixture.statistic("widgets/behaviors.json"), (3, 2, 5));

    let suites = fixture.read_json("widgets/suites.json");
    assert_eq!(suites["total"], 5);
    // untouched counters survive
    assert_eq!(suites["items"][0]["statistic"]["broken"], 0);
    assert_eq!(suites["items"][0]["name"], "Login");

    let widget = fixture.read_json("widgets/summary.json");
    assert_eq!(widget["reportName"], DEFAULT_REPORT_NAME);
    assert_eq!(widget["time"]["duration"], 4000);
}

#[test]
fn test_children_injected_into_every_target() {
    let children = example_children();
    let fixture = create_merge_fixture(&children);

    let summary = merge_report(&MergeOptions::new(&fixture.report, &fixture.results)).unwrap();
    assert_eq!(summary.injected_targets.len(), REPORT_TARGETS.len());

    for target in REPORT_TARGETS {
        let value = fixture.read_json(target);
        assert_eq!(value["children"], children, "children mismatch in {target}");
        assert!(value["uid"].is_string(), "existing members kept in {target}");
    }
}

#[test]
fn test_report_targets_use_single_space_indent() {
    let fixture = create_merge_fixture(&example_children());
    merge_report(&MergeOptions::new(&fixture.report, &fixture.results)).unwrap();

    let text = fs::read_to_string(fixture.report.join("data/suites.json")).unwrap();
    assert!(text.starts_with("{\n \"uid\""), "unexpected layout: {text}");

    let widget = fs::read_to_string(fixture.report.join("widgets/summary.json")).unwrap();
    assert!(widget.starts_with("{\n    \""), "unexpected layout: {widget}");
}

#[test]
fn test_assets_relocated() {
    let fixture = create_merge_fixture(&example_children());
    let summary = merge_report(&MergeOptions::new(&fixture.report, &fixture.results)).unwrap();

    assert_eq!(summary.test_cases, 3);
    for name in ["T1.json", "T2.json", "screenshot.png"] {
        let source = fs::read(fixture.results.join("data").join(name)).unwrap();
        assert_eq!(fixture.read_bytes(&format!("data/test-cases/{name}")), source);
    }
    // flat copy only
    assert!(!fixture.report.join("data/test-cases/attachments").exists());
    assert!(!fixture.report.join("data/test-cases/nested.txt").exists());

    assert_eq!(fixture.read_bytes("logo.png"), LOGO_BYTES);
    assert_eq!(
        fixture.read_bytes("app.js"),
        fs::read(fixture.results.join("app.js")).unwrap()
    );
    assert_eq!(
        fixture.read_bytes("styles.css"),
        fs::read(fixture.results.join("styles.css")).unwrap()
    );

    let children_bytes = fs::read(fixture.results.join("childrenObject.json")).unwrap();
    assert_eq!(fixture.read_bytes("widgets/status-chart.json"), children_bytes);
    assert!(!fixture.report.join("widgets/childrenObject.json").exists());
    assert!(!fixture.report.join("childrenObject.json").exists());

    // 4 report targets + 3 widgets written, 3 test cases + 4 assets copied
    assert_eq!(summary.files_written, 7);
    assert_eq!(summary.files_copied, 7);
}

#[test]
fn test_custom_report_name() {
    let fixture = create_merge_fixture(&example_children());
    let mut opts = MergeOptions::new(&fixture.report, &fixture.results);
    opts.report_name = "Login Suite".to_string();

    merge_report(&opts).unwrap();

    assert_eq!(fixture.read_json("widgets/summary.json")["reportName"], "Login Suite");
}

#[test]
fn test_dry_run_writes_nothing() {
    let fixture = create_merge_fixture(&example_children());
    let before = fixture.read_bytes("widgets/summary.json");
    let target_before = fixture.read_bytes("data/behaviors.json");

    let mut opts = MergeOptions::new(&fixture.report, &fixture.results);
    opts.dry_run = true;
    let summary = merge_report(&opts).unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.planned_operations, 14);
    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.files_copied, 0);
    assert_eq!(summary.bytes_written, 0);
    assert_eq!(summary.tally.passed, 1);

    assert_eq!(fixture.read_bytes("widgets/summary.json"), before);
    assert_eq!(fixture.read_bytes("data/behaviors.json"), target_before);
    assert!(!fixture.report.join("data/test-cases").exists());
    assert!(!fixture.report.join("app.js").exists());
}

#[test]
fn test_empty_children() {
    let fixture = create_merge_fixture(&serde_json::json!([]));
    let summary = merge_report(&MergeOptions::new(&fixture.report, &fixture.results)).unwrap();

    assert_eq!(summary.tally.total(), 0);
    assert_eq!(fixture.statistic("widgets/summary.json"), (2, 1, 3));
    assert_eq!(fixture.read_json("data/timeline.json")["children"], serde_json::json!([]));
}
