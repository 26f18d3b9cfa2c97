//! Retry policy for the readiness loop.
//!
//! The default policy retries forever on a fixed one-second interval. An
//! external supervisor is expected to impose any limit; `max_attempts` and
//! `deadline` exist for callers that want the gate to give up on its own.

use std::time::Duration;

use super::GateError;

/// Pause between failed probes.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// How the readiness loop paces and bounds itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Pause between failed probes.
    pub interval: Duration,
    /// Give up after this many failed probes. `None` means never.
    pub max_attempts: Option<u32>,
    /// Give up once this much time has passed. `None` means never.
    pub deadline: Option<Duration>,
    /// Cap on a single probe. `None` leaves it to the network stack.
    pub connect_timeout: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            max_attempts: None,
            deadline: None,
            connect_timeout: None,
        }
    }
}

/// What the loop does after a failed probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Sleep, then probe again.
    Sleep(Duration),
    /// Stop waiting.
    GiveUp(GiveUp),
}

/// Which bound ended the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveUp {
    Attempts,
    Deadline,
}

impl RetryPolicy {
    /// Decide the next step after `failures` failed probes, `elapsed` after
    /// the first one started.
    ///
    /// The returned sleep never runs past the deadline, so the last probe
    /// happens at the deadline at the latest.
    #[must_use]
    pub fn next_step(&self, failures: u32, elapsed: Duration) -> Step {
        if self.max_attempts.is_some_and(|max| failures >= max) {
            return Step::GiveUp(GiveUp::Attempts);
        }
        match self.deadline {
            Some(deadline) if elapsed >= deadline => Step::GiveUp(GiveUp::Deadline),
            Some(deadline) => Step::Sleep(self.interval.min(deadline - elapsed)),
            None => Step::Sleep(self.interval),
        }
    }

    /// Cap for the next probe, `elapsed` after the first one started: the
    /// smaller of `connect_timeout` and the time left before the deadline.
    /// `None` leaves the probe unbounded.
    #[must_use]
    pub fn probe_limit(&self, elapsed: Duration) -> Option<Duration> {
        let remaining = self.deadline.map(|deadline| deadline.saturating_sub(elapsed));
        match (self.connect_timeout, remaining) {
            (Some(timeout), Some(remaining)) => Some(timeout.min(remaining)),
            (timeout, remaining) => timeout.or(remaining),
        }
    }

    /// Whether the loop can end without the service becoming ready.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_attempts.is_some() || self.deadline.is_some()
    }
}

/// Parse a duration such as `500ms`, `2s`, or `1m`. A bare integer is seconds.
///
/// # Errors
///
/// Returns [`GateError::InvalidDuration`] for anything else, including
/// negative or fractional values and values that overflow.
pub fn parse_duration(input: &str) -> Result<Duration, GateError> {
    let invalid = || GateError::InvalidDuration(input.to_string());
    let trimmed = input.trim();
    let (digits, unit) = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, "s"),
    };
    let value: u64 = digits.parse().map_err(|_| invalid())?;
    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => value
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
