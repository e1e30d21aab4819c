//! Property-based tests for Set.
//!
//! Verifies the normalization invariant (unique values, dense
//! zero-based keys) across construction and every mutator.

use primus::collection::Set;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// =============================================================================
// Strategy for generating test data
// =============================================================================

/// Small value domain to make duplicates likely.
fn arbitrary_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..12_i32, 0..30)
}

fn arbitrary_set() -> impl Strategy<Value = Set<i32>> {
    arbitrary_values().prop_map(Set::from_values)
}

fn assert_normalized(set: &Set<i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(set.keys(), (0..set.len()).collect::<Vec<_>>());

    let values = set.to_vec();
    for (position, value) in values.iter().enumerate() {
        prop_assert_eq!(values.iter().position(|v| v == value), Some(position));
    }
    Ok(())
}

// =============================================================================
// Construction Law: distinct count, first occurrences, dense keys
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_keeps_first_occurrences(values in arbitrary_values()) {
        let set = Set::from_values(values.clone());

        let mut expected: Vec<i32> = Vec::new();
        for value in values {
            if !expected.contains(&value) {
                expected.push(value);
            }
        }

        prop_assert_eq!(set.to_vec(), expected);
        assert_normalized(&set)?;
    }
}

// =============================================================================
// Add Law: idempotent, grows by at most one
// =============================================================================

proptest! {
    #[test]
    fn prop_add_is_idempotent(set in arbitrary_set(), value in 0..20_i32) {
        let once = set.add(value);
        let twice = once.add(value);

        prop_assert!(once.contains(&value));
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= set.len() + 1);
        assert_normalized(&once)?;
    }
}

// =============================================================================
// Mutator Law: every mutator restores the invariant
// =============================================================================

proptest! {
    #[test]
    fn prop_mutators_restore_invariant(
        set in arbitrary_set(),
        key in 0..30_usize,
        value in 0..20_i32
    ) {
        assert_normalized(&set.set(key, value))?;
        assert_normalized(&set.remove(&value).0)?;
        assert_normalized(&set.filter(|v| v % 2 == 0))?;
        assert_normalized(&set.map(|v| v % 3))?;
        assert_normalized(&set.sort_by(|left, right| left.cmp(right)))?;
        assert_normalized(&set.reverse())?;
    }
}

// =============================================================================
// Merge Law: union of values, left order first
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_contains_exactly_both_sides(
        left in arbitrary_set(),
        right in arbitrary_set()
    ) {
        let merged = left.merge(&right);

        for value in left.iter().chain(right.iter()) {
            prop_assert!(merged.contains(value));
        }
        for value in merged.iter() {
            prop_assert!(left.contains(value) || right.contains(value));
        }
        assert_normalized(&merged)?;
    }
}

// =============================================================================
// Remove Law: removed value is gone, others survive
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_drops_only_the_target(set in arbitrary_set(), value in 0..20_i32) {
        let (removed, found) = set.remove(&value);

        prop_assert_eq!(found, set.contains(&value));
        prop_assert!(!removed.contains(&value));
        for survivor in removed.iter() {
            prop_assert!(set.contains(survivor));
        }
        assert_normalized(&removed)?;
    }
}
