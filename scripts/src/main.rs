use std::{io, process::ExitCode};

use clap::Parser;
use dotenv::dotenv;
use scripts::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file, before parsing so it feeds the env backed args
    dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr, stdout only carries the deployed addresses
    tracing_subscriber::fmt().pretty().with_writer(io::stderr).init();

    let config = match cli.harness_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command.run(&config, &cli.network).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
