//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `ansiqa` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`Context`](crate::cli::Context) and performs the command's logic by
//!   calling into the `ansiqa` library.

pub mod completions;
pub mod depends;
pub mod docs;
pub mod meta;
pub mod stats;

use anyhow::{Context as _, Result};

use ansiqa::config::{Config, ConfigPaths};
use ansiqa::role::Role;
use ansiqa::scan::{filter_roles, scan};

use crate::cli::Context;

/// Scan the context's root and keep the roles named in `names`.
///
/// An empty `names` selects every role.
pub(crate) fn load_roles(ctx: &Context, names: &[String]) -> Result<Vec<Role>> {
    let roles = scan(&ctx.root)
        .with_context(|| format!("Failed to scan '{}' for roles", ctx.root.display()))?;
    Ok(filter_roles(roles, names))
}

/// Load the layered configuration and the paths it was loaded from.
pub(crate) fn load_config(ctx: &Context) -> Result<(Config, ConfigPaths)> {
    if let Some(path) = &ctx.config {
        if !path.is_file() {
            return Err(ansiqa::suggestions::config_not_found(path));
        }
    }

    let paths = ConfigPaths::from_env(ctx.config.as_deref())?;
    let config = Config::load(&paths)?;
    Ok((config, paths))
}
