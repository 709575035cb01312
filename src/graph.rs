//! # Role Dependency Graph
//!
//! Builds the dependency relation between scanned roles from their
//! `meta/main.yml` `dependencies` lists.
//!
//! ## Relations
//!
//! - **depends**: the roles a role declares as dependencies.
//! - **depended**: the inverse, the roles that declare this role.
//! - **depth**: the length, in edges, of the longest dependency chain
//!   starting at a role. A role without dependencies has depth 0.
//!
//! Depth is computed recursively and memoized. The recursion keeps the
//! current chain on a stack, so a cycle is reported as
//! [`Error::CycleDetected`] with the offending path instead of recursing
//! forever. A dependency that names no scanned role is reported as
//! [`Error::UnknownDependency`] unless the graph was extended with
//! [`DependencyGraph::with_external_leaves`].

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;

use log::warn;

use crate::error::{Error, Result};
use crate::role::Role;

/// One role in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Roles this role depends on
    pub depends: BTreeSet<String>,
    /// Roles that depend on this role
    pub depended: BTreeSet<String>,
    /// Whether the node was added for a dependency that was not scanned
    pub external: bool,
}

/// Dependency graph over role names.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, Node>,
    depth_cache: RefCell<HashMap<String, usize>>,
}

impl DependencyGraph {
    /// Build the graph from scanned roles.
    ///
    /// Roles that share a name are merged into one node and warned about.
    pub fn from_roles(roles: &[Role]) -> Self {
        let mut graph = DependencyGraph::default();
        for role in roles {
            if graph.nodes.contains_key(&role.name) {
                warn!(
                    "Role name '{}' appears more than once (again at {}); merging its dependencies",
                    role.name,
                    role.path.display()
                );
            }
            let node = graph.nodes.entry(role.name.clone()).or_default();
            node.depends.extend(role.dependencies());
        }
        graph.link_dependents();
        graph
    }

    /// Build the graph from `(role, dependencies)` pairs.
    pub fn from_edges<I, D, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = DependencyGraph::default();
        for (role, depends) in edges {
            let node = graph.nodes.entry(role.into()).or_default();
            node.depends.extend(depends.into_iter().map(Into::into));
        }
        graph.link_dependents();
        graph
    }

    /// Add a leaf node for every dependency that names no known role.
    ///
    /// External nodes have no dependencies, so their depth is 0.
    pub fn with_external_leaves(mut self) -> Self {
        let missing: BTreeSet<String> = self
            .nodes
            .values()
            .flat_map(|node| node.depends.iter())
            .filter(|name| !self.nodes.contains_key(*name))
            .cloned()
            .collect();

        for name in missing {
            self.nodes.insert(
                name,
                Node {
                    external: true,
                    ..Node::default()
                },
            );
        }
        self.depth_cache.borrow_mut().clear();
        self.link_dependents();
        self
    }

    /// Recompute every node's `depended` set from the `depends` sets.
    fn link_dependents(&mut self) {
        let edges: Vec<(String, String)> = self
            .nodes
            .iter()
            .flat_map(|(role, node)| {
                node.depends
                    .iter()
                    .map(move |dep| (role.clone(), dep.clone()))
            })
            .collect();

        for node in self.nodes.values_mut() {
            node.depended.clear();
        }
        for (role, dep) in edges {
            if let Some(node) = self.nodes.get_mut(&dep) {
                node.depended.insert(role);
            }
        }
    }

    /// Look up a node by role name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Iterate over all nodes, ordered by role name.
    pub fn nodes(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Roles this role depends on; empty for unknown names.
    pub fn depends(&self, name: &str) -> BTreeSet<String> {
        self.nodes
            .get(name)
            .map(|node| node.depends.clone())
            .unwrap_or_default()
    }

    /// Roles that depend on this role; empty for unknown names.
    pub fn depended(&self, name: &str) -> BTreeSet<String> {
        self.nodes
            .get(name)
            .map(|node| node.depended.clone())
            .unwrap_or_default()
    }

    /// Roles nothing depends on.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.depended.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Length of the longest dependency chain starting at `name`.
    pub fn depth(&self, name: &str) -> Result<usize> {
        let mut chain = Vec::new();
        self.depth_inner(name, &mut chain)
    }

    /// Depth of every role, keyed by name.
    pub fn depths(&self) -> Result<BTreeMap<String, usize>> {
        self.nodes
            .keys()
            .map(|name| Ok((name.clone(), self.depth(name)?)))
            .collect()
    }

    fn depth_inner(&self, name: &str, chain: &mut Vec<String>) -> Result<usize> {
        if let Some(depth) = self.depth_cache.borrow().get(name) {
            return Ok(*depth);
        }

        if let Some(start) = chain.iter().position(|seen| seen == name) {
            let mut cycle: Vec<&str> = chain[start..].iter().map(String::as_str).collect();
            cycle.push(name);
            return Err(Error::CycleDetected {
                cycle: cycle.join(" -> "),
            });
        }

        let node = self.nodes.get(name).ok_or_else(|| Error::UnknownDependency {
            role: chain.last().cloned().unwrap_or_default(),
            dependency: name.to_string(),
        })?;

        chain.push(name.to_string());
        let mut depth = 0;
        for dep in &node.depends {
            depth = depth.max(self.depth_inner(dep, chain)? + 1);
        }
        chain.pop();

        self.depth_cache
            .borrow_mut()
            .insert(name.to_string(), depth);
        Ok(depth)
    }

    /// Render the graph in Graphviz dot format.
    ///
    /// One `"role" -> "dependency";` edge per relation. Roles without any
    /// edge are listed as bare nodes so they still appear in the drawing.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph roles {\n");
        for (name, node) in &self.nodes {
            if node.depends.is_empty() && node.depended.is_empty() {
                let _ = writeln!(out, "    {};", quote(name));
            }
            for dep in &node.depends {
                let _ = writeln!(out, "    {} -> {};", quote(name), quote(dep));
            }
        }
        out.push_str("}\n");
        out
    }
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
