//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::time::Duration;

use anyhow::Result;

use crate::domain::{Handoff, Target};

// ── Network Probe Port ────────────────────────────────────────────────────────

/// A single readiness check against a service port.
///
/// Implementations must not leave anything behind between attempts: each
/// call opens and releases its own resources.
#[allow(async_fn_in_trait)]
pub trait ReadinessProbe {
    /// Attempt one connection to `target`, bounded by `timeout` when given.
    ///
    /// # Errors
    ///
    /// Returns an error describing why the service is not accepting
    /// connections yet.
    async fn probe(&self, target: &Target, timeout: Option<Duration>) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so the loop can emit notices without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit a notice after a failed probe. `attempt` starts at 1.
    fn waiting(&self, target: &Target, attempt: u32);
    /// Emit the notice that the service accepted a connection.
    fn ready(&self, target: &Target, attempts: u32);
}

// ── Handoff Port ──────────────────────────────────────────────────────────────

/// Transfers control to the command that was waiting on the service.
pub trait CommandLauncher {
    /// Run `handoff` with inherited streams and return its exit code.
    ///
    /// Implementations that replace the current process only return on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started.
    fn launch(&self, handoff: &Handoff) -> Result<u8>;
}
