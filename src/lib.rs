// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod launch;
pub mod logging;
pub mod manifest;
pub mod schema;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, ConfigSource, OutputFormat};
use crate::config::{SuzieqConfig, default_config_path, load_and_validate};
use crate::errors::{LaunchError, ValidationError};
use crate::exec::EnvPolicy;
use crate::launch::{LaunchDescriptor, resolve};
use crate::manifest::Manifest;
use crate::schema::{example_config, field, json_schema};

/// High-level entry point used by `main.rs`.
///
/// Returns the process exit code: `0` on success, `1` when `check` finds an
/// invalid configuration, and the server's own code under `launch`.
pub async fn run(args: CliArgs) -> Result<i32> {
    match args.command {
        Command::Resolve { source, compact } => {
            let config = load_config(&source)?;
            println!("{}", render_descriptor(&resolve(&config), compact)?);
            Ok(0)
        }
        Command::Check { source } => check(&source),
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&json_schema())?);
            Ok(0)
        }
        Command::Example { format } => {
            print!("{}", render_example(format)?);
            Ok(0)
        }
        Command::Manifest => {
            print!("{}", Manifest::build().to_yaml()?);
            Ok(0)
        }
        Command::Launch {
            source,
            isolate_env,
            dry_run,
        } => {
            let config = load_config(&source)?;
            let desc = resolve(&config);

            if dry_run {
                print_dry_run(&desc, isolate_env)?;
                return Ok(0);
            }

            let policy = if isolate_env {
                EnvPolicy::Isolated
            } else {
                EnvPolicy::Inherit
            };
            Ok(exec::launch(&desc, policy).await?)
        }
    }
}

/// Load and validate a configuration from wherever `source` points.
pub fn load_config(source: &ConfigSource) -> std::result::Result<SuzieqConfig, LaunchError> {
    if source.from_env {
        debug!("reading configuration from environment");
        return Ok(SuzieqConfig::from_env()?);
    }

    let path = source.config.clone().unwrap_or_else(default_config_path);
    info!(?path, "loading configuration");
    load_and_validate(&path)
}

/// Descriptor as JSON, pretty unless `compact`.
pub fn render_descriptor(desc: &LaunchDescriptor, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(desc)
    } else {
        serde_json::to_string_pretty(desc)
    }
}

/// The example configuration in the requested format.
pub fn render_example(format: OutputFormat) -> Result<String> {
    let example = example_config();
    let out = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&example)?),
        OutputFormat::Toml => toml::to_string(&example)?,
    };
    Ok(out)
}

/// One line per rejected field, naming the env variable it feeds.
pub fn render_validation_report(err: &ValidationError) -> String {
    err.issues()
        .iter()
        .map(|issue| match field(&issue.field) {
            Some(spec) => format!("invalid: {issue} (env {})", spec.env_var),
            None => format!("invalid: {issue}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn check(source: &ConfigSource) -> Result<i32> {
    match load_config(source) {
        Ok(config) => {
            if let Err(e) = config.endpoint_url() {
                println!("warning: endpoint is not a valid URL ({e})");
            }
            println!("ok");
            Ok(0)
        }
        Err(LaunchError::Validation(err)) => {
            println!("{}", render_validation_report(&err));
            Ok(1)
        }
        Err(other) => Err(other.into()),
    }
}

fn print_dry_run(desc: &LaunchDescriptor, isolate_env: bool) -> Result<()> {
    println!("suzieq-launch dry-run");
    println!(
        "  env policy = {}",
        if isolate_env { "isolated" } else { "inherit" }
    );
    println!("{}", render_descriptor(&desc.redacted(), false)?);

    debug!("dry-run complete (no process started)");
    Ok(())
}
