//! gate - wait for a service port, then hand off to a command

use std::process::ExitCode;

use clap::Parser;

use gate_cli::cli::Cli;
use gate_cli::domain::GateError;
use gate_cli::infra::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match cli.run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<GateError>())
                .map_or(1, GateError::exit_code);
            ExitCode::from(code)
        }
    }
}
