//! Property-based tests for comparator invariants.
//!
//! Covers reflexivity on independently built copies, count mismatches on
//! length changes, index reporting for single-element changes, and float
//! equality semantics.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use deepeq_core::{compare, FailureReason};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_independent_copies_compare_equal(
        values in prop::collection::vec(any::<i64>(), 0..32),
        text in "\\PC*",
    ) {
        prop_assert!(compare(&values, &values.clone()).is_ok());
        prop_assert!(compare(&text, &text.clone()).is_ok());
    }

    #[test]
    fn prop_nested_maps_compare_equal_to_clones(
        map in prop::collection::btree_map("[a-z]{1,4}", prop::collection::vec(any::<u8>(), 0..4), 0..8),
    ) {
        let copy: BTreeMap<String, Vec<u8>> = map.clone();
        prop_assert!(compare(&map, &copy).is_ok());
    }

    #[test]
    fn prop_length_change_is_count_mismatch_at_collection(
        values in prop::collection::vec(any::<u16>(), 0..16),
        extra in prop::collection::vec(any::<u16>(), 1..8),
    ) {
        let mut longer = values.clone();
        longer.extend(extra);

        for err in [
            compare(&values, &longer).unwrap_err(),
            compare(&longer, &values).unwrap_err(),
        ] {
            prop_assert_eq!(err.reason(), FailureReason::CountMismatch);
            prop_assert_eq!(err.path(), Some("Vec<u16>"));
        }
    }

    #[test]
    fn prop_single_change_reports_its_index(
        values in prop::collection::vec(any::<i32>(), 1..16),
        index in any::<prop::sample::Index>(),
        delta in 1_i32..100,
    ) {
        let i = index.index(values.len());
        let mut changed = values.clone();
        changed[i] = changed[i].wrapping_add(delta);

        let err = compare(&values, &changed).unwrap_err();
        let expected = format!("Vec<i32>[{i}]");

        prop_assert_eq!(err.reason(), FailureReason::ValueInequality);
        prop_assert_eq!(err.path(), Some(expected.as_str()));
    }

    #[test]
    fn prop_float_equality_is_nan_aware(a in any::<f64>(), b in any::<f64>()) {
        let expected = a == b || (a.is_nan() && b.is_nan());
        prop_assert_eq!(compare(&a, &b).is_ok(), expected);
    }
}
