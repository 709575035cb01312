//! YAML mapping merge operations
//!
//! The three strategies used to reconcile a role's own `meta`/`extra` data
//! with the mappings supplied by configuration. All of them mutate `base`
//! in place and only read `source`.
//!
//! - [`update`]: shallow, `source`'s top-level keys win
//! - [`augment`]: deep, only adds keys that `base` lacks
//! - [`replace`]: deep, only overwrites keys that `base` already has

use log::trace;
use serde_yaml::{Mapping, Value as YamlValue};

/// Shallow update: every top-level key of `source` overwrites the same key
/// in `base`. Nested mappings are replaced wholesale, never merged.
pub fn update(base: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        base.insert(key.clone(), value.clone());
    }
}

/// Add values from `source` without changing any value `base` already has.
///
/// Where both sides hold a mapping under the same key the merge recurses,
/// so new nested keys are added below existing mappings too.
pub fn augment(base: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        match base.get_mut(key) {
            Some(YamlValue::Mapping(existing)) => {
                if let YamlValue::Mapping(incoming) = value {
                    augment(existing, incoming);
                }
            }
            Some(_) => {
                trace!("augment: keeping existing value for {}", key_label(key));
            }
            None => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Overwrite values in `base` with values from `source`, never adding keys.
///
/// Where both sides hold a mapping under the same key the merge recurses;
/// any other pairing replaces `base`'s value with `source`'s.
pub fn replace(base: &mut Mapping, source: &Mapping) {
    for (key, existing) in base.iter_mut() {
        let Some(incoming) = source.get(key) else {
            continue;
        };
        match (existing, incoming) {
            (YamlValue::Mapping(existing), YamlValue::Mapping(incoming)) => {
                replace(existing, incoming);
            }
            (existing, incoming) => {
                *existing = incoming.clone();
            }
        }
    }
}

fn key_label(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        other => format!("{:?}", other),
    }
}
