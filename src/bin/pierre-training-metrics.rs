// ABOUTME: Pierre training metrics CLI - summarizes a batch of workout sensor packages
// ABOUTME: Prints one report line per package on stdout, in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training summary printer for workout sensor packages
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sensor batch
//! pierre-training-metrics
//!
//! # Summarize explicit packages
//! pierre-training-metrics --package RUN:15000,1,75 --package SWM:720,1,80,25,40
//!
//! # JSON lines, Russian labels
//! pierre-training-metrics --format json --locale ru
//! ```

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Parser;
use pierre_training_metrics::{
    config::SummaryConfig,
    errors::ErrorResponse,
    formatters::{format_summary, Locale, OutputFormat},
    logging::LoggingConfig,
    packages::{default_packages, process_batch, SensorPackage},
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-training-metrics",
    about = "Pierre workout summary printer",
    long_about = "Computes distance, mean speed and calories for running, walking and swimming sensor packages."
)]
struct Cli {
    /// Sensor package as TAG:v1,v2,... (repeatable; defaults to the built-in batch)
    #[arg(long = "package", short = 'p', value_name = "TAG:VALUES")]
    packages: Vec<SensorPackage>,

    /// Output format (text, json); overrides `TRAINING_SUMMARY_FORMAT`
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Report language (en, ru); overrides `TRAINING_SUMMARY_LOCALE`
    #[arg(long)]
    locale: Option<Locale>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = SummaryConfig::from_env()?.with_overrides(cli.locale, cli.format);

    let packages = if cli.packages.is_empty() {
        debug!("No packages given, using the built-in sensor batch");
        default_packages()
    } else {
        cli.packages
    };

    let outcomes = process_batch(&packages);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0_usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(summary) => {
                let line = format_summary(summary, config.output_format, config.locale)?;
                writeln!(out, "{line}")?;
            }
            Err(error) => {
                failed += 1;
                match config.output_format {
                    OutputFormat::Json => {
                        let response = ErrorResponse::for_package(error, &outcome.workout_type);
                        writeln!(out, "{}", serde_json::to_string(&response)?)?;
                    }
                    OutputFormat::Text => {
                        eprintln!("{}: {error}", outcome.workout_type);
                    }
                }
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        bail!("{failed} of {} sensor packages failed", outcomes.len());
    }
    Ok(())
}
