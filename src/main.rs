//! # ansiqa CLI
//!
//! This is the binary entry point for the `ansiqa` command-line tool, which
//! checks and maintains a directory of Ansible roles.
//!
//! Argument parsing and command dispatch live in [`cli`]; each subcommand is
//! implemented in [`commands`] on top of the `ansiqa` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
