//! # Docs Command Implementation
//!
//! This module implements the `docs` subcommand, which renders a
//! documentation file for every selected role from a Jinja2-style template.
//!
//! The template comes from the `template` key of the configuration or, when
//! unset, the first `README.*.j2` in the working directory or the home
//! directory. `README.md.j2` renders to `<role>/README.md`.
//!
//! With `--check` each rendered document is printed instead of written.

use anyhow::Result;
use clap::Args;
use log::info;

use ansiqa::docs::DocRenderer;
use ansiqa::suggestions;

use crate::cli::Context;

/// Render role documentation from a template
#[derive(Args, Debug)]
pub struct DocsArgs {
    /// Only operate on these roles
    #[arg(short = 'r', long = "role", value_name = "NAME", num_args = 1..)]
    pub roles: Vec<String>,

    /// Print the rendered documents instead of writing them
    #[arg(short = 'C', long)]
    pub check: bool,
}

/// Execute the `docs` command.
pub fn execute(args: DocsArgs, ctx: &Context) -> Result<()> {
    let (config, paths) = super::load_config(ctx)?;
    let template = config
        .resolve_template(&paths)
        .map_err(suggestions::with_hints)?
        .ok_or_else(suggestions::no_template)?;
    info!("Using template {}", template.display());

    let renderer = DocRenderer::new(&template).map_err(suggestions::with_hints)?;
    let roles = super::load_roles(ctx, &args.roles)?;

    for role in &roles {
        if args.check {
            print!("{}", renderer.render(role)?);
        } else {
            let path = renderer.write(role)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
