//! CLI argument definitions for the claim scrubber.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "837 claim scrubber - parse claim files and evaluate pre-submission rules",
    long_about = "Parse flat 837 claim transactions into a structured form and\n\
                  evaluate named validation rule sets against them, emitting\n\
                  ranked findings with remediation guidance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse an 837 file and emit the structured transaction as JSON.
    Parse(ParseArgs),

    /// Parse an 837 file and evaluate a rule set against it.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the 837 file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write JSON to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the 837 file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rule-set name to evaluate (resolves to <NAME>_rules.json).
    #[arg(long = "rules", value_name = "NAME", default_value = "default")]
    pub rule_set: String,

    /// Rules directory (default: SCRUB_RULES_DIR or the workspace rules/).
    #[arg(long = "rules-dir", value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Write findings_report.json into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
