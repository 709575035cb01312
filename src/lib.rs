//! # ansiqa Library
//!
//! Quality assurance helpers for repositories of Ansible roles. The library
//! scans a directory tree for roles, loads their declared data and produces
//! reports, materialized metadata, rendered documentation and dependency
//! graphs. It backs the `ansiqa` command-line tool.
//!
//! ## Quick Example
//!
//! ```no_run
//! use ansiqa::graph::DependencyGraph;
//! use ansiqa::scan::scan;
//! use std::path::Path;
//!
//! let roles = scan(Path::new("roles")).unwrap();
//! let graph = DependencyGraph::from_roles(&roles);
//! for (name, depth) in graph.depths().unwrap() {
//!     println!("{name}: {depth}");
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Roles (`role`, `scan`)**: A role is a directory containing `tasks/`
//!   or `handlers/`. Scanning loads its variables, defaults, metadata, tasks
//!   (with includes expanded) and file listings.
//! - **Merge strategies (`merge`)**: Update, augment and replace, used to
//!   reconcile role metadata with configured defaults.
//! - **Dependency graph (`graph`)**: Depends and depended-by relations plus
//!   memoized dependency depth, with cycle and unknown-role detection.
//! - **Configuration (`config`)**: Layered `.ansiqa` files and template
//!   discovery.
//! - **Outputs (`report`, `metadata`, `docs`, `output`)**: Tables, YAML
//!   dumps, metadata files and rendered documentation.

pub mod config;
pub mod defaults;
pub mod docs;
pub mod error;
pub mod graph;
pub mod merge;
pub mod metadata;
pub mod output;
pub mod report;
pub mod role;
pub mod scan;
pub mod suggestions;

#[cfg(test)]
mod merge_proptest;
