//! # Completions Command Implementation
//!
//! Writes a shell completion script for `ansiqa` to stdout, generated by
//! `clap_complete` from the CLI definition.
//!
//! ```bash
//! ansiqa completions bash > ~/.local/share/bash-completion/completions/ansiqa
//! ansiqa completions zsh > ~/.zfunc/_ansiqa
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn io::Write) {
    generate(shell, &mut Cli::command(), "ansiqa", out);
}
