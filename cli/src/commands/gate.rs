//! `gate <host> -- <command>` — wait for the service, then hand off.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::application::services::gate::open_gate;
use crate::domain::{
    DEFAULT_PORT, DEFAULT_SERVICE_NAME, Handoff, RetryPolicy, Target, parse_duration, parse_host,
};
use crate::infra::handoff::ProcessLauncher;
use crate::infra::network::TcpProbe;
use crate::output::{OutputContext, TerminalReporter};

/// Arguments for the gate.
#[derive(Args, Debug)]
pub struct GateArgs {
    /// Host running the service to wait for
    #[arg(value_parser = parse_host)]
    pub host: String,

    /// Command and arguments to run once the service accepts connections
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,

    /// Port to probe
    #[arg(short, long, env = "GATE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Pause between probes (e.g. 500ms, 1s, 1m)
    #[arg(long, env = "GATE_INTERVAL", default_value = "1s", value_parser = parse_duration)]
    pub interval: Duration,

    /// Cap on a single connection attempt; defaults to the system timeout
    #[arg(long, env = "GATE_CONNECT_TIMEOUT", value_parser = parse_duration)]
    pub connect_timeout: Option<Duration>,

    /// Give up after this many failed probes; waits forever when unset
    #[arg(long, env = "GATE_MAX_ATTEMPTS", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Give up after waiting this long; waits forever when unset
    #[arg(long, env = "GATE_TIMEOUT", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Service name used in progress notices
    #[arg(long, env = "GATE_SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub name: String,
}

impl GateArgs {
    /// Retry policy described by the flags.
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval: self.interval,
            max_attempts: self.max_attempts,
            deadline: self.timeout,
            connect_timeout: self.connect_timeout,
        }
    }
}

/// Wait for the service described by `args`, then hand off to its command.
///
/// Returns the exit code the process should end with. On Unix a successful
/// handoff never returns.
///
/// # Errors
///
/// Returns an error if the host is invalid, a bounded wait gives up, or the
/// command cannot be started.
pub async fn run(ctx: &OutputContext, args: GateArgs) -> Result<u8> {
    let target = Target::new(&args.host, args.port)?;
    let policy = args.policy();
    tracing::debug!(%target, ?policy, command = ?args.command, "gate armed");

    let handoff = Handoff::from_argv(args.command);
    let reporter = TerminalReporter::new(ctx, &args.name);

    open_gate(
        &TcpProbe,
        &reporter,
        &ProcessLauncher,
        &target,
        &policy,
        handoff.as_ref(),
    )
    .await
}
