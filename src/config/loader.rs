// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawConfig, SuzieqConfig};
use crate::errors::Result;

/// On-disk formats a config file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Parse config text in the given format without validating it.
pub fn parse_raw(contents: &str, format: ConfigFormat) -> Result<RawConfig> {
    let raw: RawConfig = match format {
        ConfigFormat::Toml => toml::from_str(contents)?,
        ConfigFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a configuration file from a given path and return the `RawConfig`.
///
/// This only deserializes; it does **not** check the schema. Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    debug!(?path, ?format, "reading config file");

    let contents = fs::read_to_string(path)?;
    parse_raw(&contents, format)
}

/// Load a configuration file from path and validate it against the schema.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SuzieqConfig> {
    let raw = load_from_path(&path)?;
    let config = SuzieqConfig::try_from(raw)?;
    Ok(config)
}

/// Config file used when `--config` is not given: `suzieq.toml` in the
/// current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("suzieq.toml")
}
