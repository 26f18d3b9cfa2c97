//! Typed domain error enum.
//!
//! Converts to `anyhow::Error` via the `?` operator; `main` walks the chain
//! to find the process exit code.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Exit code used when the gate gives up or hits a runtime error.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code when the handed-off program exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: u8 = 126;

/// Exit code when the handed-off program cannot be found.
pub const EXIT_NOT_FOUND: u8 = 127;

/// Errors raised by the gate itself. Probe failures are not errors; they are
/// retried until the retry policy says otherwise.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("invalid duration '{0}': expected an integer with an optional ms, s or m suffix")]
    InvalidDuration(String),

    #[error("{target} not ready after {attempts} attempts")]
    AttemptsExhausted { target: String, attempts: u32 },

    #[error("{target} not ready after {}ms", elapsed.as_millis())]
    DeadlineExceeded { target: String, elapsed: Duration },

    #[error("failed to execute {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl GateError {
    /// Process exit code for this error, following shell conventions for
    /// programs that cannot be run.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            Self::Spawn { .. } => EXIT_NOT_EXECUTABLE,
            _ => EXIT_FAILURE,
        }
    }
}
