//! CLI argument definitions for the address normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "address-normalizer",
    version,
    about = "Normalize French postal addresses into uppercased components",
    long_about = "Normalize French postal addresses.\n\n\
                  Removes zip codes and city names, strips punctuation and accents,\n\
                  splits each address into up to 8 components and expands\n\
                  street-type abbreviations (av -> AVENUE, bd -> BOULEVARD)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include address values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an address file.
    Normalize(NormalizeArgs),

    /// List street types and the variants rewritten to them.
    StreetTypes(ReferenceArgs),
}

#[derive(Args)]
pub struct ReferenceArgs {
    /// Directory holding zip_codes.csv, city_names.csv and street_types.csv
    /// (default: $ADDRESS_REFERENCE_DIR, else the bundled reference/ directory).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Address file name, resolved against --input-dir.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Directory containing the input file.
    #[arg(long = "input-dir", value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    #[command(flatten)]
    pub reference: ReferenceArgs,

    /// Write normalized records to this file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output file format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Input column delimiter.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Normalize and print the summary without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip rows with fewer than two fields instead of aborting.
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
