//! Main entry point for the linkopen CLI.
//!
//! Resolves file links as they appear in chat messages and compiler output
//! and hands them to an editor, a terminal or the file manager:
//! - `resolve`: Print the resolved path
//! - `open` / `reveal`: Dispatch to the configured application or file manager
//! - `copy-link`: Copy the link to the clipboard
//! - `menu`: Show or run the context menu for a link

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    linkopen::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        workspace: cli.workspace,
        platform: cli.platform,
        target: cli.target,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Open(cmd) => cmd.execute(&global),
        cli::Command::Reveal(cmd) => cmd.execute(&global),
        cli::Command::CopyLink(cmd) => cmd.execute(&global),
        cli::Command::Menu(cmd) => cmd.execute(&global),
        cli::Command::Platform(cmd) => cmd.execute(&global),
        cli::Command::Targets(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
