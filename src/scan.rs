//! # Role Discovery
//!
//! Walks a directory tree and loads every role found in it.
//!
//! ## Process
//!
//! 1.  **Walk**: Directories are visited depth-first, entries sorted by file
//!     name so the resulting order is stable between runs.
//!
//! 2.  **Classify**: A directory that directly contains `tasks/` or
//!     `handlers/` is a role. It is loaded with [`Role::load`] and the walk
//!     does not descend into it; its siblings and the rest of the tree are
//!     still visited. Directories that cannot be read are logged and
//!     skipped.
//!
//! 3.  **Filter**: Commands may restrict the result to a set of role names
//!     with [`filter_roles`].

use std::path::Path;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::role::{is_role_dir, Role};

/// Find and load every role under `root`, in traversal order.
///
/// `root` itself is a role when it contains `tasks/` or `handlers/`.
/// A missing root yields no roles.
pub fn scan(root: &Path) -> Result<Vec<Role>> {
    if !root.is_dir() {
        warn!("Scan root {} is not a directory", root.display());
        return Ok(Vec::new());
    }

    let mut roles = Vec::new();
    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let Some(entry) = skip_walk_error(entry) else {
            continue;
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if is_role_dir(entry.path()) {
            roles.push(Role::load(entry.path())?);
            walker.skip_current_dir();
        }
    }

    debug!("Found {} role(s) under {}", roles.len(), root.display());
    Ok(roles)
}

/// Pass a walk entry through, or log the failure and drop it.
pub(crate) fn skip_walk_error(entry: walkdir::Result<DirEntry>) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!("{}; skipping", Error::from(err));
            None
        }
    }
}

/// Keep only the roles whose name is listed in `names`, in scan order.
///
/// An empty `names` keeps every role. Names matching no role are logged.
pub fn filter_roles(roles: Vec<Role>, names: &[String]) -> Vec<Role> {
    if names.is_empty() {
        return roles;
    }

    for name in names {
        if !roles.iter().any(|role| &role.name == name) {
            warn!("No role named '{}' was found", name);
        }
    }

    roles
        .into_iter()
        .filter(|role| names.contains(&role.name))
        .collect()
}
