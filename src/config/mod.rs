// src/config/mod.rs

//! Configuration instances for the launcher.
//!
//! Responsibilities:
//! - Define the loosely typed input (`RawConfig`) and the validated
//!   `SuzieqConfig` (`model.rs`).
//! - Check raw input against the declared schema (`validate.rs`).
//! - Load a config file from disk, TOML or JSON (`loader.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{RawConfig, SuzieqConfig};
