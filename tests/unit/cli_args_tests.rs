//! Unit tests for CLI argument parsing
#[cfg(test)]
mod tests {
	use allure_merge::cli::args::parse_args;
	use allure_merge::{CounterMode, DEFAULT_REPORT_NAME, InjectMode};
	use std::path::Path;

	fn make_args(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn parse_defaults() {
		let argv = make_args(&["allure-merge", "allure-report", "allure-results"]);

		let parsed = parse_args(&argv).expect("parse args");
		assert_eq!(parsed.report_dir, "allure-report");
		assert_eq!(parsed.results_dir, "allure-results");

		let opts = parsed.to_options();
		assert_eq!(opts.report_dir, Path::new("allure-report"));
		assert_eq!(opts.results_dir, Path::new("allure-results"));
		assert_eq!(opts.report_name, DEFAULT_REPORT_NAME);
		assert_eq!(opts.counter_mode, CounterMode::Delta);
		assert_eq!(opts.inject_mode, InjectMode::Structural);
		assert!(!opts.dry_run);
	}

	#[test]
	fn parse_all_flags() {
		let argv = make_args(&[
			"allure-merge",
			"--report-name",
			"Smoke",
			"report",
			"--absolute-counters",
			"--marker",
			"// children",
			"results",
			"--dry-run",
			"--json",
			"--quiet",
		]);

		let parsed = parse_args(&argv).expect("parse args");
		assert!(parsed.json);
		assert!(parsed.quiet);

		let opts = parsed.to_options();
		assert_eq!(opts.report_name, "Smoke");
		assert_eq!(opts.counter_mode, CounterMode::Absolute);
		assert_eq!(opts.inject_mode, InjectMode::Marker("// children".to_string()));
		assert!(opts.dry_run);
	}

	#[test]
	fn parse_missing_results_dir() {
		let argv = make_args(&["allure-merge", "report"]);
		let err = parse_args(&argv).unwrap_err();
		assert!(err.contains("RESULTS_DIR"));
	}

	#[test]
	fn parse_rejects_extra_and_unknown() {
		let argv = make_args(&["allure-merge", "a", "b", "c"]);
		assert!(parse_args(&argv).unwrap_err().contains("Unexpected argument: c"));

		let argv = make_args(&["allure-merge", "a", "b", "--force"]);
		assert!(parse_args(&argv).unwrap_err().contains("Unknown option: --force"));
	}

	#[test]
	fn parse_option_without_value() {
		let argv = make_args(&["allure-merge", "a", "b", "--marker"]);
		assert!(parse_args(&argv).unwrap_err().contains("--marker requires a value"));

		let argv = make_args(&["allure-merge", "a", "b", "--marker", ""]);
		assert!(parse_args(&argv).is_err());
	}
}
