//! Merge strategies for role metadata
//!
//! A role's `meta/main.yml` and `extra/main.yml` are reconciled with the
//! mappings defined in the configuration file using one of three modes.
//! The mode is chosen per invocation; the CLI makes `--augment` and
//! `--replace` mutually exclusive and falls back to a shallow update.
//!
//! The mapping-level operations live in [`yaml`].

pub mod yaml;

use serde_yaml::Mapping;

/// How configured values are merged into a role's existing mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Shallow update, configured top-level keys overwrite the role's.
    #[default]
    Update,
    /// Only add keys the role does not define, at any nesting level.
    Augment,
    /// Only change keys the role already defines, at any nesting level.
    Replace,
}

impl MergeMode {
    /// Select the mode from the two mutually exclusive CLI flags.
    pub fn from_flags(augment: bool, replace: bool) -> Self {
        match (augment, replace) {
            (true, _) => MergeMode::Augment,
            (false, true) => MergeMode::Replace,
            (false, false) => MergeMode::Update,
        }
    }

    /// Merge `source` into `base` according to this mode.
    pub fn apply(self, base: &mut Mapping, source: &Mapping) {
        match self {
            MergeMode::Update => yaml::update(base, source),
            MergeMode::Augment => yaml::augment(base, source),
            MergeMode::Replace => yaml::replace(base, source),
        }
    }
}
