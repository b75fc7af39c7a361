//! imeta CLI: interface conformance checking and documentation composition.
//!
//! This binary provides the `imeta` command with subcommands for checking
//! interface manifests, printing composed documentation and comparing
//! signatures. See `imeta --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter: Box<dyn imeta_output::OutputFormatter> = if cli.json {
        Box::new(imeta_output::json::JsonFormatter)
    } else {
        Box::new(imeta_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            paths,
            strict,
            raise,
        } => commands::check::run(&*formatter, cli.config.as_deref(), paths, strict, raise),
        Commands::Docs {
            paths,
            class,
            member,
        } => commands::docs::run(&*formatter, cli.config.as_deref(), paths, class, member),
        Commands::Compat {
            candidate,
            reference,
        } => commands::compat::run(&*formatter, &candidate, &reference),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
