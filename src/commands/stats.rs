//! # Stats Command Implementation
//!
//! This module implements the `stats` subcommand, which summarizes the roles
//! found under the scan root.
//!
//! ## Output Modes
//!
//! - **Summary table** (default): task, variable and default counts per role,
//!   and whether a README, meta data and extra data exist.
//! - **`--dump-vars` / `--dump-defaults`**: every selected role's variables
//!   or defaults merged into one YAML document. Later roles win.
//! - **`--list-files` / `--list-templates`**: one path per line.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::{ArgGroup, Args};

use ansiqa::report;

use crate::cli::Context;

/// Show statistics about roles
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct StatsArgs {
    /// Only operate on these roles
    #[arg(short = 'r', long = "role", value_name = "NAME", num_args = 1..)]
    pub roles: Vec<String>,

    /// Dump the merged vars of all selected roles as YAML
    #[arg(long, group = "mode")]
    pub dump_vars: bool,

    /// Dump the merged defaults of all selected roles as YAML
    #[arg(long, group = "mode")]
    pub dump_defaults: bool,

    /// List the files of all selected roles
    #[arg(long, group = "mode")]
    pub list_files: bool,

    /// List the templates of all selected roles
    #[arg(long, group = "mode")]
    pub list_templates: bool,
}

/// Execute the `stats` command.
pub fn execute(args: StatsArgs, ctx: &Context) -> Result<()> {
    let roles = super::load_roles(ctx, &args.roles)?;

    if args.dump_vars {
        print!("{}", report::yaml_document(&report::dump_vars(&roles))?);
    } else if args.dump_defaults {
        print!("{}", report::yaml_document(&report::dump_defaults(&roles))?);
    } else if args.list_files {
        for file in report::list_files(&roles) {
            println!("{}", file.display());
        }
    } else if args.list_templates {
        for template in report::list_templates(&roles) {
            println!("{}", template.display());
        }
    } else {
        print!("{}", report::stats_table(&roles));
    }

    Ok(())
}
