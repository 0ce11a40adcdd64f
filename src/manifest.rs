// src/manifest.rs

//! Launcher manifest: the document a host runtime reads to learn how to
//! start the server and which configuration to ask its user for.
//!
//! ```yaml
//! startCommand:
//!   type: stdio
//!   configSchema: { ... }
//!   exampleConfig:
//!     suzieqApiEndpoint: http://example.com/api/v2
//!     suzieqApiKey: example_key_123
//!   exampleLaunch:
//!     command: python
//!     args: [main.py]
//!     env: { ... }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SuzieqConfig;
use crate::errors::Result;
use crate::launch::{LaunchDescriptor, resolve};
use crate::schema::{example_config, json_schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Stdio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCommand {
    #[serde(rename = "type")]
    pub transport: Transport,
    pub config_schema: Value,
    pub example_config: SuzieqConfig,
    pub example_launch: LaunchDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub start_command: StartCommand,
}

impl Manifest {
    /// Assemble the manifest from the declared schema and example config.
    pub fn build() -> Self {
        let example = example_config();
        let example_launch = resolve(&example);
        Self {
            start_command: StartCommand {
                transport: Transport::Stdio,
                config_schema: json_schema(),
                example_config: example,
                example_launch,
            },
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}
