//! Process handoff — implements `CommandLauncher`.
//!
//! On Unix the gate replaces its own process image, so the command inherits
//! the PID, streams, environment and working directory, and its exit status
//! is the gate's by construction. Elsewhere the command is spawned with
//! inherited stdio and its exit code forwarded.

use std::io::Write as _;
use std::process::Command;

use anyhow::Result;

use crate::application::ports::CommandLauncher;
use crate::domain::{GateError, Handoff};

/// Production launcher.
pub struct ProcessLauncher;

impl CommandLauncher for ProcessLauncher {
    fn launch(&self, handoff: &Handoff) -> Result<u8> {
        tracing::info!(
            program = handoff.program(),
            args = handoff.args().len(),
            "handing off"
        );
        // Notices must reach the terminal before the image is replaced.
        if let Err(e) = std::io::stdout().flush() {
            tracing::debug!(error = %e, "flushing stdout before handoff failed");
        }

        let mut command = Command::new(handoff.program());
        command.args(handoff.args());
        replace(command, handoff.program())
    }
}

#[cfg(unix)]
fn replace(mut command: Command, program: &str) -> Result<u8> {
    use std::os::unix::process::CommandExt as _;

    // `exec` only returns on failure.
    let source = command.exec();
    Err(GateError::Spawn {
        program: program.to_string(),
        source,
    }
    .into())
}

#[cfg(not(unix))]
fn replace(mut command: Command, program: &str) -> Result<u8> {
    let status = command.status().map_err(|source| GateError::Spawn {
        program: program.to_string(),
        source,
    })?;
    // Exit statuses are reported modulo 256, as a shell would.
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code & 0xff).ok())
        .unwrap_or(1))
}
