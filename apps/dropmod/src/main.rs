//! # DropMod - THE BINARY
//!
//! Operator CLI for per-block drop chances.

use clap::Parser;
use dropmod::cli::{
    Cli, Commands, cmd_break, cmd_complete, cmd_console, cmd_get, cmd_init, cmd_remove, cmd_set,
};
use dropmod::error::CliError;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_path();

    match cli.command {
        Commands::Init { force } => cmd_init(config, force),
        Commands::Set { block, chance } => cmd_set(config, &block, &chance),
        Commands::Get { block } => cmd_get(config, block.as_deref(), cli.json),
        Commands::Remove { block } => cmd_remove(config, &block),
        Commands::Complete { args } => cmd_complete(&args).map(|_| ()),
        Commands::Break {
            block,
            above,
            ageable,
            rolls,
            seed,
        } => cmd_break(
            config,
            &block,
            above.as_deref(),
            ageable,
            rolls,
            seed,
            cli.json,
        )
        .map(|_| ()),
        Commands::Console => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            cmd_console(config, stdin, stdout).map(|_| ())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // chat-style replies were already printed; keep the log quiet
        Err(CliError::Command(_)) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
