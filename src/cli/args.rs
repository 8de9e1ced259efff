//! CLI argument parsing

use crate::{CounterMode, DEFAULT_REPORT_NAME, InjectMode, MergeOptions};

#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub report_dir: String,
    pub results_dir: String,
    pub report_name: Option<String>,
    pub absolute_counters: bool,
    pub marker: Option<String>,
    pub dry_run: bool,
    pub json: bool,
    pub quiet: bool,
}

impl CliArgs {
    /// Build merge options from the parsed flags
    #[must_use]
    pub fn to_options(&self) -> MergeOptions {
        MergeOptions {
            report_name: self
                .report_name
                .clone()
                .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string()),
            counter_mode: if self.absolute_counters {
                CounterMode::Absolute
            } else {
                CounterMode::Delta
            },
            inject_mode: self
                .marker
                .clone()
                .map_or(InjectMode::Structural, InjectMode::Marker),
            dry_run: self.dry_run,
            ..MergeOptions::new(&self.report_dir, &self.results_dir)
        }
    }
}

/// Parse command line arguments (including the program name at index 0)
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut positional = Vec::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--report-name" => {
                i += 1;
                if i >= args.len() {
                    return Err("--report-name requires a value".to_string());
                }
                cli.report_name = Some(args[i].clone());
            }
            "--marker" => {
                i += 1;
                if i >= args.len() {
                    return Err("--marker requires a value".to_string());
                }
                if args[i].is_empty() {
                    return Err("--marker must not be empty".to_string());
                }
                cli.marker = Some(args[i].clone());
            }
            "--absolute-counters" => {
                cli.absolute_counters = true;
            }
            "--dry-run" => {
                cli.dry_run = true;
            }
            "--json" => {
                cli.json = true;
            }
            "--quiet" => {
                cli.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                positional.push(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    cli.report_dir = positional
        .next()
        .ok_or_else(|| "Missing required argument: REPORT_DIR".to_string())?;
    cli.results_dir = positional
        .next()
        .ok_or_else(|| "Missing required argument: RESULTS_DIR".to_string())?;
    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument: {extra}"));
    }

    Ok(cli)
}
