//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CopyLinkCommand, MenuCommand, OpenCommand, PlatformCommand,
    ResolveCommand, RevealCommand, TargetsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving and opening file links.
#[derive(Parser)]
#[command(name = "linkopen")]
#[command(version, about = "Resolve and open file links from chat messages", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LINKOPEN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Workspace root relative links are resolved against
    #[arg(long, short = 'w', value_name = "ROOT", global = true)]
    pub workspace: Option<String>,

    /// Resolve paths for this platform (windows, macos, linux, unknown)
    #[arg(long, value_name = "NAME", global = true)]
    pub platform: Option<String>,

    /// Application to open links with (vscode, cursor, zed, ghostty, antigravity, finder)
    #[arg(long, value_name = "ID", global = true)]
    pub target: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the path a file link resolves to
    Resolve(ResolveCommand),

    /// Open a file link with the configured application
    Open(OpenCommand),

    /// Reveal a file link in the file manager
    Reveal(RevealCommand),

    /// Copy a file link to the clipboard
    CopyLink(CopyLinkCommand),

    /// Show or run the context menu for a file link
    Menu(MenuCommand),

    /// Show the platform links are resolved for
    Platform(PlatformCommand),

    /// List the applications links can be opened with
    Targets(TargetsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
