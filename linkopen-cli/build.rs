//! Build script for linkopen-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("linkopen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and open file links from chat messages")
        .long_about(
            "Command-line tool that resolves file links such as src/app.ts:42:7 against a \
             workspace root and opens them in an editor, a terminal or the file manager",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("LINKOPEN_DATA_DIR"),
        )
        .arg(
            Arg::new("workspace")
                .long("workspace")
                .short('w')
                .help("Workspace root relative links are resolved against")
                .value_name("ROOT")
                .global(true),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Resolve paths for this platform (windows, macos, linux, unknown)")
                .value_name("NAME")
                .global(true),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .help("Application to open links with")
                .value_name("ID")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the path a file link resolves to")
                .long_about("Strip any :line:col suffix and resolve the link against the workspace"),
            Command::new("open")
                .about("Open a file link with the configured application")
                .long_about("Open the resolved file in the configured editor or terminal"),
            Command::new("reveal")
                .about("Reveal a file link in the file manager")
                .long_about("Show the resolved file highlighted in the system file manager"),
            Command::new("copy-link")
                .about("Copy a file link to the clipboard")
                .long_about("Copy the resolved link, as a file:// URL where possible"),
            Command::new("menu")
                .about("Show or run the context menu for a file link")
                .long_about("Print the right-click menu for a link or run one of its items"),
            Command::new("platform")
                .about("Show the platform links are resolved for")
                .long_about("Display the detected or configured platform"),
            Command::new("targets")
                .about("List the applications links can be opened with")
                .long_about("List supported open targets and mark the configured one"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("linkopen.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
