//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::output::OutputContext;

/// Wait until a service accepts TCP connections, then run a command in
/// place of this process
#[derive(Parser, Debug)]
#[command(name = "gate", version, arg_required_else_help = true)]
pub struct Cli {
    /// Suppress progress notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also disabled when `NO_COLOR` is set)
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub gate: commands::gate::GateArgs,
}

impl Cli {
    /// Execute the gate and return the exit code to finish with.
    ///
    /// # Errors
    ///
    /// Returns an error if the wait gives up or the command cannot be run.
    pub async fn run(self) -> Result<u8> {
        let Cli {
            quiet,
            no_color,
            gate,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        commands::gate::run(&ctx, gate).await
    }
}
