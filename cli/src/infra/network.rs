//! Network infrastructure — implements `ReadinessProbe` with a TCP connect.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::net::TcpStream;

use crate::application::ports::ReadinessProbe;
use crate::domain::Target;

/// Production probe: the service is ready once a TCP handshake completes.
/// No bytes are sent; the socket is closed as soon as it connects.
pub struct TcpProbe;

impl ReadinessProbe for TcpProbe {
    async fn probe(&self, target: &Target, timeout: Option<Duration>) -> Result<()> {
        let connect = TcpStream::connect((target.host(), target.port()));
        let stream = match timeout {
            Some(limit) => tokio::time::timeout(limit, connect)
                .await
                .map_err(|_| anyhow::anyhow!("connect timed out after {}ms", limit.as_millis()))
                .with_context(|| format!("connecting to {target}"))?,
            None => connect.await,
        }
        .with_context(|| format!("connecting to {target}"))?;
        drop(stream);
        Ok(())
    }
}
