//! # Meta and Extra Command Implementation
//!
//! This module implements the `meta` and `extra` subcommands. Both merge a
//! mapping from the `.ansiqa` configuration into every selected role and
//! write the result to `<role>/meta/main.yml` or `<role>/extra/main.yml`.
//!
//! ## Merge Modes
//!
//! - **update** (default): configured top-level keys overwrite the role's.
//! - **`--augment`**: only keys the role lacks are added, recursively.
//! - **`--replace`**: only keys the role already has are overwritten,
//!   recursively.
//!
//! With `--check` the merge runs in memory and the table reports which roles
//! would change; no file is written.

use anyhow::Result;
use clap::{ArgGroup, Args};
use log::debug;

use ansiqa::merge::MergeMode;
use ansiqa::metadata::materialize;
use ansiqa::output::{Status, Table};
use ansiqa::role::Attribute;
use ansiqa::suggestions;

use crate::cli::Context;

/// Merge configured data into role metadata
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("strategy").multiple(false)))]
pub struct MetaArgs {
    /// Only operate on these roles
    #[arg(short = 'r', long = "role", value_name = "NAME", num_args = 1..)]
    pub roles: Vec<String>,

    /// Report what would change without writing any file
    #[arg(short = 'C', long)]
    pub check: bool,

    /// Only add keys that are missing from the role
    #[arg(long, group = "strategy")]
    pub augment: bool,

    /// Only overwrite keys the role already has
    #[arg(long, group = "strategy")]
    pub replace: bool,
}

/// Execute the `meta` or `extra` command for `attr`.
pub fn execute(args: MetaArgs, ctx: &Context, attr: Attribute) -> Result<()> {
    let (config, _) = super::load_config(ctx)?;
    let source = config.attribute(attr).map_err(suggestions::with_hints)?;

    let mode = MergeMode::from_flags(args.augment, args.replace);
    debug!("Merging {} with {:?} (check: {})", attr.dir_name(), mode, args.check);

    let mut roles = super::load_roles(ctx, &args.roles)?;
    let outcomes = materialize(&mut roles, attr, source, mode, args.check)?;

    let mut table = Table::with_headers(["name", "status"]);
    for outcome in outcomes {
        let status = if outcome.changed {
            Status::Changed
        } else {
            Status::Ok
        };
        table.push_row(vec![outcome.role, status.to_string()]);
    }
    print!("{}", table);

    Ok(())
}
