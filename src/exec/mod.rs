// src/exec/mod.rs

//! Host-side process spawning.
//!
//! Resolution never spawns anything; this module is what the `launch`
//! command uses to act as a minimal host for a [`LaunchDescriptor`].
//!
//! - [`command`] turns a descriptor into a `tokio::process::Command` under an
//!   explicit [`EnvPolicy`] and runs it to completion.
//!
//! [`LaunchDescriptor`]: crate::launch::LaunchDescriptor

pub mod command;

pub use command::{EnvPolicy, build_command, build_command_in, launch, launch_in};
