//! Treeify CLI Binary
//!
//! Reads a flat tree listing from --json, writes the nested forest as one
//! line of JSON on stdout. All diagnostics go to stderr.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treeify::cli::{execute, map_error, Cli, ConvertRequest};
use treeify::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Treeify starting");

    let request = match ConvertRequest::from_cli(&cli) {
        Ok(request) => request,
        Err(e) => {
            error!("Invalid arguments: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match execute(&request) {
        Ok(output) => {
            info!("Conversion completed");
            println!("{}", output);
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI arguments
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = LoggingConfig::default();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
