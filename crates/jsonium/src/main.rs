mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Expand {
            expression,
            document,
            json,
        } => commands::expand::run(&expression, document, json, cli.verbose),
        Commands::Run {
            plan,
            stage,
            compact,
        } => commands::run::run(plan, stage, compact, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
