use std::path::PathBuf;

use clap::Parser;
use filetags::cli::commands::Cli;
use filetags::cli::handlers;
use filetags::logging::{self, LogTarget};

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it only logs when asked to write a file
    let target = match (&cli.log_file, cli.command.is_some()) {
        (Some(path), _) => Some(LogTarget::File(path.as_path())),
        (None, true) => Some(LogTarget::Stderr),
        (None, false) => None,
    };
    if let Some(target) = target
        && let Err(e) = logging::init_tracing(cli.verbose, target)
    {
        eprintln!("error: cannot initialize logging: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let vault_dir = cli.vault_dir.as_deref().map(PathBuf::from);
            if let Err(e) = filetags::tui::run(vault_dir.as_deref(), cli.config.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
