//! # Depends Command Implementation
//!
//! This module implements the `depends` subcommand, which shows how roles
//! depend on each other through the `dependencies` list in `meta/main.yml`.
//!
//! ## Output Modes
//!
//! - **Table** (default): depth, depends and depended-by for every role.
//! - **`--dot`**: the whole graph in Graphviz format.
//! - **`--tree`**: each top-level role with its dependencies nested below.
//!
//! The graph is always built from every scanned role so that depths are
//! correct; `-r` only narrows what is printed. Cycles and dependencies on
//! roles that were not scanned fail the command before anything is printed,
//! unless `--allow-external` turns unknown dependencies into leaves.

use anyhow::Result;
use clap::{ArgGroup, Args};
use log::warn;
use ptree::{print_tree, TreeItem};

use ansiqa::graph::DependencyGraph;
use ansiqa::report::depends_table;
use ansiqa::suggestions;

use crate::cli::Context;

/// Show role dependencies and dependency depth
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("format").multiple(false)))]
pub struct DependsArgs {
    /// Only show these roles
    #[arg(short = 'r', long = "role", value_name = "NAME", num_args = 1..)]
    pub roles: Vec<String>,

    /// Print the dependency graph in Graphviz dot format
    #[arg(long, group = "format")]
    pub dot: bool,

    /// Print the dependencies as a tree
    #[arg(long, group = "format")]
    pub tree: bool,

    /// Treat dependencies on roles outside the scanned directory as leaves
    #[arg(long)]
    pub allow_external: bool,
}

/// Execute the `depends` command.
pub fn execute(args: DependsArgs, ctx: &Context) -> Result<()> {
    let roles = super::load_roles(ctx, &[])?;
    let mut graph = DependencyGraph::from_roles(&roles);
    if args.allow_external {
        graph = graph.with_external_leaves();
    }

    // Validate the whole graph up front
    graph.depths().map_err(suggestions::with_hints)?;

    for name in unknown_names(&graph, &args.roles) {
        warn!("No role named '{}' was found", name);
    }

    if args.dot {
        print!("{}", graph.to_dot());
    } else if args.tree {
        if let Some(tree) = build_tree(&graph, &ctx.root.display().to_string(), &args.roles) {
            print_tree(&tree).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
        }
    } else {
        let table = depends_table(&graph, &args.roles).map_err(suggestions::with_hints)?;
        print!("{}", table);
    }

    Ok(())
}

/// Names in `names` that match no node of the graph.
fn unknown_names<'a>(graph: &DependencyGraph, names: &'a [String]) -> Vec<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .filter(|name| graph.node(name).is_none())
        .collect()
}

/// Build the tree view below a node labelled `label`.
///
/// The top level holds the named roles, or every role nobody depends on
/// when `names` is empty. Returns `None` when there is nothing to show.
fn build_tree(graph: &DependencyGraph, label: &str, names: &[String]) -> Option<TreeNode> {
    let tops: Vec<&str> = if names.is_empty() {
        graph.roots()
    } else {
        names
            .iter()
            .map(String::as_str)
            .filter(|name| graph.node(name).is_some())
            .collect()
    };

    if tops.is_empty() {
        return None;
    }

    Some(TreeNode {
        label: label.to_string(),
        children: tops.into_iter().map(|name| build_tree_node(graph, name)).collect(),
    })
}

/// The graph has been checked for cycles, so recursion terminates.
fn build_tree_node(graph: &DependencyGraph, name: &str) -> TreeNode {
    let external = graph.node(name).map(|node| node.external).unwrap_or(false);
    let label = if external {
        format!("{} (external)", name)
    } else {
        name.to_string()
    };

    let children = graph
        .depends(name)
        .iter()
        .map(|dependency| build_tree_node(graph, dependency))
        .collect();
    TreeNode { label, children }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
