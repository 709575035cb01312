//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;
use ansiqa::output::OutputConfig;

/// ansiqa - Ansible role quality assurance
#[derive(Parser, Debug)]
#[command(name = "ansiqa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Directory to scan for roles
    #[arg(short, long, global = true, value_name = "DIR", env = "ANSIQA_PATH", default_value = ".")]
    path: PathBuf,

    /// Configuration file to use instead of ./.ansiqa
    #[arg(long, global = true, value_name = "FILE", env = "ANSIQA_CONFIG")]
    config: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show statistics about roles
    Stats(commands::stats::StatsArgs),

    /// Merge configured meta data into each role's meta/main.yml
    Meta(commands::meta::MetaArgs),

    /// Merge configured extra data into each role's extra/main.yml
    Extra(commands::meta::MetaArgs),

    /// Render role documentation from a template
    Docs(commands::docs::DocsArgs),

    /// Show role dependencies and dependency depth
    Depends(commands::depends::DependsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Scan root
    pub root: PathBuf,
    /// Replacement for the working-directory configuration file
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        OutputConfig::from_env_and_flag(&self.color).apply();

        let ctx = Context {
            root: self.path,
            config: self.config,
        };

        match self.command {
            Commands::Stats(args) => commands::stats::execute(args, &ctx),
            Commands::Meta(args) => commands::meta::execute(args, &ctx, ansiqa::role::Attribute::Meta),
            Commands::Extra(args) => {
                commands::meta::execute(args, &ctx, ansiqa::role::Attribute::Extra)
            }
            Commands::Docs(args) => commands::docs::execute(args, &ctx),
            Commands::Depends(args) => commands::depends::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr at the requested level.
///
/// `RUST_LOG` still refines the filter when set.
fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Warn);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}
