//! CLI argument definitions for `modstate`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "modstate",
    version,
    about = "Inspect a namespaced state store through typed getter accessors",
    long_about = "Builds the sample shop store (system and basket modules) and reads its \
                  getters.\n\n\
                  State comes from the built-in sample unless --state points at a JSON file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Shop state as JSON (default: built-in sample).
    #[arg(long = "state", value_name = "PATH", global = true)]
    pub state: Option<PathBuf>,

    /// Recompute getters on every read instead of caching them.
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q to silence).
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
    /// List every registered getter with its kind.
    Getters,

    /// Read one getter and print its value as JSON.
    Read(ReadArgs),
}

#[derive(Parser)]
pub struct ReadArgs {
    /// Module name, e.g. `basket`.
    #[arg(value_name = "MODULE")]
    pub module: String,

    /// Getter name within the module, e.g. `productNames`.
    #[arg(value_name = "GETTER")]
    pub getter: String,

    /// JSON argument for a parametric getter, e.g. `--arg false`.
    #[arg(long = "arg", value_name = "JSON")]
    pub arg: Option<String>,
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
