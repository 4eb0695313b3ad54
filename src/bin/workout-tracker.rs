// ABOUTME: Command line driver rendering workout summaries for coded sensor packages
// ABOUTME: Runs the sample packages or packages given as arguments and maps errors to exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Tracker Binary
//!
//! Usage:
//! ```bash
//! # Summaries for the three sample packages
//! cargo run --bin workout-tracker
//!
//! # Custom packages, JSON output
//! cargo run --bin workout-tracker -- --workout RUN:15000,1,75 --workout WLK:9000,1,75,180 --format json
//!
//! # Supported codes and their value layout
//! cargo run --bin workout-tracker -- --list-types
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use workout_tracker::{
    config::TrackerConfig,
    errors::{AppError, AppResult, ErrorResponse},
    factory::supported_types,
    formatters::OutputFormat,
    logging::LoggingConfig,
    runner::{run_packages, sample_packages, Package},
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Distance, mean speed and calorie summaries for workout sensor packages"
)]
struct Args {
    /// Package to process as CODE:v1,v2,... (repeatable, defaults to the sample packages)
    #[arg(short, long = "workout", value_name = "PACKAGE")]
    workouts: Vec<Package>,

    /// Output format (text, json), overrides WORKOUT_OUTPUT_FORMAT
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Print the supported workout codes and their value layout, then exit
    #[arg(long)]
    list_types: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let logging = if args.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Logging initialization failed: {e}");
    }

    let config = match TrackerConfig::from_env() {
        Ok(config) => config,
        Err(e) => return report(e, args.format.unwrap_or_default()),
    };
    let config = match args.format {
        Some(format) => config.with_output_format(format),
        None => config,
    };
    info!("{}", config.summary());

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e, config.output_format),
    }
}

fn run(args: &Args, config: &TrackerConfig) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_types {
        return list_types(&mut out);
    }

    let packages = if args.workouts.is_empty() {
        sample_packages()
    } else {
        args.workouts.clone()
    };

    run_packages(&packages, config.output_format, &mut out)?;
    Ok(())
}

fn list_types<W: Write>(out: &mut W) -> AppResult<()> {
    for workout_type in supported_types() {
        writeln!(
            out,
            "{}  {:<14} [{}]",
            workout_type.code(),
            workout_type.display_name(),
            workout_type.package_fields().join(", ")
        )?;
    }
    Ok(())
}

/// Print the diagnostic line on stderr and pick the exit status
fn report(e: AppError, format: OutputFormat) -> ExitCode {
    debug!(error.code = ?e.code, "{}", e);
    let exit_code = e.exit_code();

    match format {
        OutputFormat::Json => match serde_json::to_string(&ErrorResponse::from(e)) {
            Ok(json) => eprintln!("{json}"),
            Err(json_error) => eprintln!("error: {json_error}"),
        },
        OutputFormat::Text => eprintln!("error: {e}"),
    }

    ExitCode::from(exit_code)
}
