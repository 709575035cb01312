//! # Metadata Materialization
//!
//! Merges a configured mapping into each role's `meta/main.yml` or
//! `extra/main.yml` and writes the result back to disk.
//!
//! In check mode nothing is written; the outcome still reports whether the
//! file would change. A failure on one role aborts the rest of the batch.

use std::fs;

use log::info;

use crate::error::Result;
use crate::merge::MergeMode;
use crate::report::yaml_document;
use crate::role::{Attribute, Role};

/// What happened to one role's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub role: String,
    /// Whether the merged mapping differs from what the role had
    pub changed: bool,
}

/// Merge `source` into `attr` of every role and, unless `check`, write
/// `<role>/<attr>/main.yml`.
///
/// The in-memory roles are updated either way, so later steps see the
/// merged values.
pub fn materialize(
    roles: &mut [Role],
    attr: Attribute,
    source: &serde_yaml::Mapping,
    mode: MergeMode,
    check: bool,
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(roles.len());
    for role in roles.iter_mut() {
        let before = role.attribute(attr).clone();
        mode.apply(role.attribute_mut(attr), source);
        let changed = &before != role.attribute(attr);

        if !check {
            let path = role.attribute_path(attr);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, yaml_document(role.attribute(attr))?)?;
            info!("Wrote {}", path.display());
        }

        outcomes.push(Outcome {
            role: role.name.clone(),
            changed,
        });
    }
    Ok(outcomes)
}
