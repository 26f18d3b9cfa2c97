//! Probe target: the host and port the gate waits on.

use std::fmt;

use super::GateError;

/// Well-known PostgreSQL port, probed unless overridden.
pub const DEFAULT_PORT: u16 = 5432;

/// Service label used in progress notices.
pub const DEFAULT_SERVICE_NAME: &str = "database";

/// A validated `host:port` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
    port: u16,
}

impl Target {
    /// Build a target from a raw host string.
    ///
    /// Surrounding whitespace is trimmed and IPv6 brackets are removed, so
    /// `[::1]` and `::1` name the same target.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::EmptyHost`] if nothing is left after trimming.
    pub fn new(host: &str, port: u16) -> Result<Self, GateError> {
        Ok(Self {
            host: parse_host(host)?,
            port,
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Normalise a host argument. Used directly as a clap value parser.
///
/// # Errors
///
/// Returns [`GateError::EmptyHost`] for blank input.
pub fn parse_host(raw: &str) -> Result<String, GateError> {
    let trimmed = raw.trim();
    let host = trimmed
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(trimmed);
    if host.is_empty() {
        return Err(GateError::EmptyHost);
    }
    Ok(host.to_string())
}
