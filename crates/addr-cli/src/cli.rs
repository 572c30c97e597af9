//! CLI argument definitions for `addr`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "addr",
    version,
    about = "Format geocoded address components by country convention",
    long_about = "Format geocoded address components by country convention.\n\n\
                  Input is a JSON object, an array of objects, or JSON Lines.\n\
                  Set ADDRESS_FORMATTING_CONF_DIR to load a configuration directory\n\
                  instead of the built-in tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
    /// Format addresses read from a file or stdin.
    Format(FormatArgs),

    /// List the countries with formatting rules.
    Countries(CountriesArgs),

    /// Print table counts of the loaded configuration as JSON.
    Summary(ConfArgs),
}

#[derive(Args)]
pub struct FormatArgs {
    /// Abbreviate common words (Street, Avenue, ...) using the country's languages.
    #[arg(long = "abbreviate")]
    pub abbreviate: bool,

    /// Read input from this file instead of stdin.
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub conf: ConfArgs,
}

#[derive(Args)]
pub struct CountriesArgs {
    /// Print the listing as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub conf: ConfArgs,
}

#[derive(Args)]
pub struct ConfArgs {
    /// Configuration directory with countries/worldwide.yaml and components.yaml.
    #[arg(long = "conf-dir", value_name = "DIR")]
    pub conf_dir: Option<PathBuf>,
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
