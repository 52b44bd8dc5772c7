mod badge;
mod ci;
mod cli;
mod commands;
mod complexity;
mod config;
mod error;
mod git;
mod loc;
mod report;
mod report_helpers;
mod scan;
mod score;
mod util;
mod valuation;
mod walk;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => commands::scan(&args).map(|()| true),
        Commands::Badge(args) => commands::badge(&args),
        Commands::Init => commands::init(Path::new(".")).map(|()| true),
        Commands::Version => {
            commands::version();
            Ok(true)
        }
        Commands::Completions { shell } => {
            commands::completions(shell);
            Ok(true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
