//! # Reports
//!
//! Formatting of scan results: the role summary table, merged variable and
//! default dumps, file listings and the dependency table.

use std::path::PathBuf;

use serde_yaml::Mapping;

use crate::defaults::YAML_DOCUMENT_MARKER;
use crate::error::{Error, Result};
use crate::graph::DependencyGraph;
use crate::merge::yaml::update;
use crate::output::{Status, Table};
use crate::role::{Attribute, Role};

/// Merge every role's `vars` into one mapping; later roles win.
pub fn dump_vars(roles: &[Role]) -> Mapping {
    dump_attribute(roles, Attribute::Vars)
}

/// Merge every role's `defaults` into one mapping; later roles win.
pub fn dump_defaults(roles: &[Role]) -> Mapping {
    dump_attribute(roles, Attribute::Defaults)
}

fn dump_attribute(roles: &[Role], attr: Attribute) -> Mapping {
    let mut merged = Mapping::new();
    for role in roles {
        update(&mut merged, role.attribute(attr));
    }
    merged
}

/// Serialize a mapping as a YAML document starting with `---`.
///
/// An empty mapping renders as the bare marker line.
pub fn yaml_document(map: &Mapping) -> Result<String> {
    if map.is_empty() {
        return Ok(format!("{}\n", YAML_DOCUMENT_MARKER));
    }
    let body = serde_yaml::to_string(map).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })?;
    Ok(format!("{}\n{}", YAML_DOCUMENT_MARKER, body))
}

/// All files of the given roles, in role order.
pub fn list_files(roles: &[Role]) -> Vec<PathBuf> {
    roles.iter().flat_map(|role| role.files.iter().cloned()).collect()
}

/// All templates of the given roles, in role order.
pub fn list_templates(roles: &[Role]) -> Vec<PathBuf> {
    roles
        .iter()
        .flat_map(|role| role.templates.iter().cloned())
        .collect()
}

/// Summary table of roles, sorted by name.
pub fn stats_table(roles: &[Role]) -> Table {
    let mut sorted: Vec<&Role> = roles.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut table = Table::with_headers(["name", "tasks", "vars", "defaults", "README", "meta", "extra"]);
    for role in sorted {
        table.push_row(vec![
            role.name.clone(),
            role.tasks.len().to_string(),
            role.vars.len().to_string(),
            role.defaults.len().to_string(),
            Status::presence(!role.readme.is_empty()).to_string(),
            Status::presence(!role.meta.is_empty()).to_string(),
            Status::presence(!role.extra.is_empty()).to_string(),
        ]);
    }
    table
}

/// Dependency table for the roles named in `names` (all when empty),
/// sorted by name.
///
/// Fails on cycles and unknown dependencies, see [`DependencyGraph::depth`].
pub fn depends_table(graph: &DependencyGraph, names: &[String]) -> Result<Table> {
    let mut table = Table::with_headers(["name", "depth", "depends", "depended"]);
    for (name, node) in graph.nodes() {
        if node.external || (!names.is_empty() && !names.contains(name)) {
            continue;
        }
        table.push_row(vec![
            name.clone(),
            graph.depth(name)?.to_string(),
            join_names(&node.depends),
            join_names(&node.depended),
        ]);
    }
    Ok(table)
}

fn join_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
