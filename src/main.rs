use anyhow::Context;
use clap::Parser;
use std::process;
use todos::cli::Cli;
use todos::cli_handlers;

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize logging")
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }

    let cli = Cli::parse();
    let config = cli.store_config();

    match cli_handlers::run(&config, cli.command) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(if e.is_recoverable() { 1 } else { 2 });
        }
    }
}
