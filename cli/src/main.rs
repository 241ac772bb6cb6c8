mod cli;
mod error;
mod extract;

use clap::Parser;
use cli::{Cli, EXAMPLE, USAGE};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the markdown, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version still print and exit 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    let Some(version) = cli.release else {
        eprintln!("Usage: {USAGE}");
        eprintln!("Example: {EXAMPLE}");
        process::exit(1);
    };

    match extract::execute(&version) {
        Ok(notes) => println!("{notes}"),
        Err(err) => {
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
            process::exit(1);
        }
    }
}
