//! Allure report merger (allure-merge) - Main binary entry point

use allure_merge::cli::args::parse_args;
use allure_merge::cli::output::{format_json, format_text};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug allure-merge allure-report allure-results
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    if !cli_args.quiet {
        eprintln!(
            "Merging {} into {}",
            cli_args.results_dir, cli_args.report_dir
        );
    }

    let summary = match allure_merge::merge_report(&cli_args.to_options()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(match e {
                allure_merge::Error::InvalidInput(_) => 2,
                _ => 4,
            });
        }
    };

    if cli_args.json {
        println!("{}", format_json(&summary));
    } else if !cli_args.quiet {
        println!("{}", format_text(&summary));
    }

    if !cli_args.quiet && !summary.dry_run {
        eprintln!("Report merge complete");
    }
}

fn print_help() {
    println!("Allure report merger (allure-merge) - Merge custom results into an Allure report");
    println!();
    println!("USAGE:");
    println!("    allure-merge <REPORT_DIR> <RESULTS_DIR> [OPTIONS]");
    println!();
    println!("ARGUMENTS:");
    println!("    <REPORT_DIR>              Generated report (data/, widgets/)");
    println!("    <RESULTS_DIR>             Raw results (childrenObject.json, data/, assets)");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("MERGE OPTIONS:");
    println!("    --report-name <NAME>      Label for widgets/summary.json (default: \"Automation Test Report\")");
    println!("    --absolute-counters       Overwrite counters with the tally instead of adding to them");
    println!("    --marker <TEXT>           Splice children after the line containing TEXT");
    println!("    --dry-run                 Validate and plan without writing anything");
    println!("    --json                    Emit machine-readable summary");
    println!("    --quiet                   Suppress non-error output");
    println!();
    println!("EXAMPLES:");
    println!("    allure-merge allure-report allure-results");
    println!("    allure-merge allure-report allure-results --absolute-counters --json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("allure-merge {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
