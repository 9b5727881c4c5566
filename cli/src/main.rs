//! stackctl - Safe host updates for the self-hosted assistant stack

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stackctl::app::report_error;
use stackctl::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => report_error(&e, json),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`, `debug` with `-v`).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
