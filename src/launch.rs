// src/launch.rs

//! Launch descriptor resolution.
//!
//! Turns a validated [`SuzieqConfig`] into the command, arguments and
//! environment a host needs to start the SuzieQ MCP server over stdio.
//! Resolution is a pure mapping: no I/O, no logging, no spawning (see
//! [`crate::exec`] for the latter).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{RawConfig, SuzieqConfig};
use crate::errors::ValidationError;
use crate::schema::CONFIG_FIELDS;

/// Interpreter that runs the server.
pub const SERVER_COMMAND: &str = "python";
/// Entry point handed to [`SERVER_COMMAND`].
pub const SERVER_ENTRY_POINT: &str = "main.py";

/// How to start the server process.
///
/// `env` holds only the variables derived from the configuration; whether
/// the parent environment is inherited on top is up to the host
/// (see [`crate::exec::EnvPolicy`]).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDescriptor {
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

impl LaunchDescriptor {
    /// Copy of this descriptor with secret env values masked, for display.
    pub fn redacted(&self) -> Self {
        let env = self
            .env
            .iter()
            .map(|(name, value)| {
                let secret = CONFIG_FIELDS
                    .iter()
                    .any(|f| f.secret && f.env_var == name.as_str());
                let shown = if secret { "<redacted>".to_string() } else { value.clone() };
                (name.clone(), shown)
            })
            .collect();

        Self {
            command: self.command.clone(),
            args: self.args.clone(),
            env,
        }
    }
}

impl fmt::Debug for LaunchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.redacted();
        f.debug_struct("LaunchDescriptor")
            .field("command", &shown.command)
            .field("args", &shown.args)
            .field("env", &shown.env)
            .finish()
    }
}

/// Map a validated config onto its launch descriptor.
pub fn resolve(config: &SuzieqConfig) -> LaunchDescriptor {
    let env = CONFIG_FIELDS
        .iter()
        .filter_map(|spec| {
            config
                .value_of(spec.name)
                .map(|value| (spec.env_var.to_string(), value.to_string()))
        })
        .collect();

    LaunchDescriptor {
        command: SERVER_COMMAND.to_string(),
        args: vec![SERVER_ENTRY_POINT.to_string()],
        env,
    }
}

/// Validate a raw config and resolve it in one step.
///
/// Nothing is built when validation fails.
pub fn resolve_value(raw: &RawConfig) -> Result<LaunchDescriptor, ValidationError> {
    let config = SuzieqConfig::try_from(raw)?;
    Ok(resolve(&config))
}
