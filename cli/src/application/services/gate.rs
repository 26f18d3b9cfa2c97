//! The readiness gate: poll until the target accepts a connection, then hand
//! off to the waiting command.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;

use crate::application::ports::{CommandLauncher, ProgressReporter, ReadinessProbe};
use crate::domain::{GateError, GiveUp, Handoff, RetryPolicy, Step, Target};

/// Outcome of a successful wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    /// Probes made, including the successful one.
    pub attempts: u32,
    /// Time from the first probe to readiness.
    pub elapsed: Duration,
}

/// Probe `target` until it accepts a connection.
///
/// Emits one `waiting` notice per failed probe and one `ready` notice on
/// success. With the default policy this only returns once ready.
///
/// # Errors
///
/// Returns [`GateError::AttemptsExhausted`] or [`GateError::DeadlineExceeded`]
/// when a bounded policy runs out.
pub async fn wait_until_ready(
    probe: &impl ReadinessProbe,
    reporter: &impl ProgressReporter,
    target: &Target,
    policy: &RetryPolicy,
) -> Result<Readiness, GateError> {
    let started = Instant::now();
    let mut failures: u32 = 0;

    loop {
        let outcome = match policy.probe_limit(started.elapsed()) {
            Some(limit) => tokio::time::timeout(limit, probe.probe(target, Some(limit)))
                .await
                .unwrap_or_else(|_| {
                    Err(anyhow::anyhow!("probe timed out after {}ms", limit.as_millis()))
                }),
            None => probe.probe(target, None).await,
        };

        match outcome {
            Ok(()) => {
                let readiness = Readiness {
                    attempts: failures.saturating_add(1),
                    elapsed: started.elapsed(),
                };
                tracing::info!(
                    %target,
                    attempts = readiness.attempts,
                    elapsed = ?readiness.elapsed,
                    "service ready"
                );
                reporter.ready(target, readiness.attempts);
                return Ok(readiness);
            }
            Err(e) => {
                failures = failures.saturating_add(1);
                tracing::debug!(
                    %target,
                    attempt = failures,
                    error = %format!("{e:#}"),
                    "probe failed"
                );
                reporter.waiting(target, failures);
            }
        }

        let elapsed = started.elapsed();
        match policy.next_step(failures, elapsed) {
            Step::Sleep(pause) => tokio::time::sleep(pause).await,
            Step::GiveUp(reason) => {
                tracing::info!(%target, attempts = failures, ?elapsed, "giving up");
                let target = target.to_string();
                return Err(match reason {
                    GiveUp::Attempts => GateError::AttemptsExhausted {
                        target,
                        attempts: failures,
                    },
                    GiveUp::Deadline => GateError::DeadlineExceeded { target, elapsed },
                });
            }
        }
    }
}

/// Wait for `target`, then hand off to `handoff`, returning the exit code
/// the process should end with.
///
/// Without a command the gate only waits and reports success.
///
/// # Errors
///
/// Returns an error if a bounded policy gives up or the command cannot be
/// started. The command is never started before the target is ready.
pub async fn open_gate(
    probe: &impl ReadinessProbe,
    reporter: &impl ProgressReporter,
    launcher: &impl CommandLauncher,
    target: &Target,
    policy: &RetryPolicy,
    handoff: Option<&Handoff>,
) -> Result<u8> {
    wait_until_ready(probe, reporter, target, policy).await?;

    match handoff {
        Some(handoff) => launcher.launch(handoff),
        None => Ok(0),
    }
}
