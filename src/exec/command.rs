// src/exec/command.rs

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::launch::LaunchDescriptor;

/// Whether the child sees the parent's environment in addition to the
/// variables from the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvPolicy {
    /// Parent environment plus descriptor variables (descriptor wins).
    #[default]
    Inherit,
    /// Descriptor variables only.
    Isolated,
}

/// Build the process command for a descriptor, searching our own `PATH`.
///
/// stdin/stdout are inherited so the stdio protocol flows straight between
/// our caller and the server; stderr is piped so it can be logged.
pub fn build_command(desc: &LaunchDescriptor, policy: EnvPolicy) -> Command {
    build_command_in(desc, policy, std::env::var_os("PATH").as_deref())
}

/// Like [`build_command`] with an explicit program search path.
///
/// Under [`EnvPolicy::Isolated`] the child's `PATH` is gone, so the program
/// is resolved against `search_path` before the environment is cleared.
pub fn build_command_in(
    desc: &LaunchDescriptor,
    policy: EnvPolicy,
    search_path: Option<&OsStr>,
) -> Command {
    let program = match policy {
        EnvPolicy::Inherit => OsString::from(&desc.command),
        EnvPolicy::Isolated => resolve_program(&desc.command, search_path),
    };

    let mut cmd = Command::new(program);
    cmd.args(&desc.args);

    if policy == EnvPolicy::Isolated {
        cmd.env_clear();
    }
    cmd.envs(&desc.env);

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    cmd
}

fn resolve_program(command: &str, search_path: Option<&OsStr>) -> OsString {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match which::which_in(command, search_path, cwd) {
        Ok(path) => {
            debug!(command, path = ?path, "resolved program before clearing environment");
            path.into_os_string()
        }
        Err(e) => {
            // Spawning reports the failure with the original name.
            debug!(command, error = %e, "program not found on PATH");
            OsString::from(command)
        }
    }
}

/// Spawn the server described by `desc` and wait for it to exit.
///
/// Ctrl-C kills the child. Returns the child's exit code, or -1 when it was
/// terminated by a signal.
pub async fn launch(desc: &LaunchDescriptor, policy: EnvPolicy) -> Result<i32> {
    launch_in(desc, policy, std::env::var_os("PATH").as_deref()).await
}

/// Like [`launch`] with an explicit program search path.
pub async fn launch_in(
    desc: &LaunchDescriptor,
    policy: EnvPolicy,
    search_path: Option<&OsStr>,
) -> Result<i32> {
    info!(
        command = %desc.command,
        args = ?desc.args,
        ?policy,
        "starting server process"
    );

    let mut child = build_command_in(desc, policy, search_path)
        .spawn()
        .with_context(|| format!("spawning '{}'", desc.command))?;

    if let Some(stderr) = child.stderr.take() {
        let program = desc.command.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(program = %program, "stderr: {}", line);
            }
            debug!(program = %program, "stderr closed");
        });
    }

    // Without a Ctrl-C handler we just wait for the child.
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    let exited = tokio::select! {
        status = child.wait() => Some(status),
        _ = interrupt => None,
    };

    let status = match exited {
        Some(status) => status.context("waiting for server process")?,
        None => {
            info!("interrupt received; stopping server process");
            child.kill().await.context("killing server process")?;
            child.wait().await.context("waiting for server process")?
        }
    };

    let code = status.code().unwrap_or(-1);
    info!(exit_code = code, success = status.success(), "server process exited");
    Ok(code)
}
