//! CLI parse: clap types for treeify. No behavior; definitions only.

use clap::Parser;

/// Treeify CLI - Convert flat tree listings into nested filesystem trees
#[derive(Parser)]
#[command(name = "treeify")]
#[command(about = "Convert flat tree listings into nested filesystem trees")]
pub struct Cli {
    /// JSON payload with a `tree` array of {path, type} entries.
    /// Optional to clap so a missing value surfaces as the typed
    /// "json not provided" error rather than a usage exit.
    #[arg(long)]
    pub json: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
