// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `suzieq-launch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "suzieq-launch",
    version,
    about = "Resolve SuzieQ MCP server configuration into a stdio launch command.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SUZIEQ_LAUNCH_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the launch descriptor for a configuration as JSON.
    Resolve {
        #[command(flatten)]
        source: ConfigSource,

        /// Print single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Validate a configuration and report every invalid field.
    Check {
        #[command(flatten)]
        source: ConfigSource,
    },

    /// Print the configuration JSON Schema.
    Schema,

    /// Print the example configuration.
    Example {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the launcher manifest (YAML).
    Manifest,

    /// Resolve the configuration and run the server over stdio.
    Launch {
        #[command(flatten)]
        source: ConfigSource,

        /// Start the server with only the configured variables in its
        /// environment instead of inheriting ours.
        #[arg(long)]
        isolate_env: bool,

        /// Print the (redacted) descriptor instead of starting anything.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Where a configuration instance comes from.
#[derive(Debug, Clone, Args)]
pub struct ConfigSource {
    /// Path to the config file (TOML, or JSON when it ends in `.json`).
    ///
    /// Default: `suzieq.toml` in the current working directory.
    #[arg(long, value_name = "PATH", conflicts_with = "from_env")]
    pub config: Option<PathBuf>,

    /// Read `SUZIEQ_API_ENDPOINT` / `SUZIEQ_API_KEY` from the environment.
    #[arg(long)]
    pub from_env: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
