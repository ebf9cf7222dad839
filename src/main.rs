//! Proctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use proctor::cli::{exit_code, handle_error, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let strict = cli.strict;

    match run::execute(cli).await {
        Ok(verdict) => exit_code(verdict, strict),
        Err(err) => handle_error(&err),
    }
}
