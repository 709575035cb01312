//! Property-based tests for the metadata merge strategies.
//!
//! These tests use proptest to generate random nested mappings and verify
//! that the augment and replace laws hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::merge::yaml::{augment, replace, update};
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};

    fn arb_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,6}".prop_map(Value::String),
        ]
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        arb_scalar().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Sequence),
                prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(|entries| {
                    Value::Mapping(
                        entries
                            .into_iter()
                            .map(|(k, v)| (Value::String(k), v))
                            .collect(),
                    )
                }),
            ]
        })
    }

    fn arb_mapping() -> impl Strategy<Value = Mapping> {
        prop::collection::btree_map("[a-d]", arb_value(), 0..5).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(k, v)| (Value::String(k), v))
                .collect()
        })
    }

    /// Every non-mapping value of `original` is still present, unchanged,
    /// at the same path in `merged`.
    fn leaves_preserved(original: &Mapping, merged: &Mapping) -> bool {
        original.iter().all(|(key, value)| match (value, merged.get(key)) {
            (Value::Mapping(before), Some(Value::Mapping(after))) => {
                leaves_preserved(before, after)
            }
            (before, Some(after)) => before == after,
            (_, None) => false,
        })
    }

    /// Every key path of `merged` exists in `original`.
    fn no_new_keys(original: &Mapping, merged: &Mapping) -> bool {
        merged.iter().all(|(key, value)| match (original.get(key), value) {
            (Some(Value::Mapping(before)), Value::Mapping(after)) => no_new_keys(before, after),
            (Some(_), _) => true,
            (None, _) => false,
        })
    }

    proptest! {
        /// Property: augment never changes a value base already had
        #[test]
        fn augment_keeps_existing_values(base in arb_mapping(), source in arb_mapping()) {
            let mut merged = base.clone();
            augment(&mut merged, &source);
            prop_assert!(leaves_preserved(&base, &merged));
        }

        /// Property: after augment, base holds its own keys and all of source's top-level keys
        #[test]
        fn augment_is_key_superset(base in arb_mapping(), source in arb_mapping()) {
            let mut merged = base.clone();
            augment(&mut merged, &source);
            for key in base.keys().chain(source.keys()) {
                prop_assert!(merged.contains_key(key));
            }
        }

        /// Property: augment is idempotent
        #[test]
        fn augment_is_idempotent(base in arb_mapping(), source in arb_mapping()) {
            let mut once = base.clone();
            augment(&mut once, &source);
            let mut twice = once.clone();
            augment(&mut twice, &source);
            prop_assert_eq!(once, twice);
        }

        /// Property: replace never adds a key, at any level
        #[test]
        fn replace_adds_no_keys(base in arb_mapping(), source in arb_mapping()) {
            let mut merged = base.clone();
            replace(&mut merged, &source);
            prop_assert!(no_new_keys(&base, &merged));
            prop_assert_eq!(merged.len(), base.len());
        }

        /// Property: replace copies source's value for every common key that is not a mapping pair
        #[test]
        fn replace_takes_source_values(base in arb_mapping(), source in arb_mapping()) {
            let mut merged = base.clone();
            replace(&mut merged, &source);
            for (key, value) in &source {
                let both_mappings = matches!(
                    (base.get(key), value),
                    (Some(Value::Mapping(_)), Value::Mapping(_))
                );
                if base.contains_key(key) && !both_mappings {
                    prop_assert_eq!(merged.get(key), Some(value));
                }
            }
        }

        /// Property: update leaves every source top-level value in place
        #[test]
        fn update_takes_all_source_values(base in arb_mapping(), source in arb_mapping()) {
            let mut merged = base.clone();
            update(&mut merged, &source);
            for (key, value) in &source {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }
}
