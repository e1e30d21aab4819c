//! Unit tests for Collection.
//!
//! Exercises construction, queries, transformations, aggregates, and
//! set algebra of the core ordered container.

use primus::collection::Collection;
use rstest::rstest;

fn sample() -> Collection<&'static str, i32> {
    Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)])
}

// =============================================================================
// Construction and conversion
// =============================================================================

#[rstest]
fn test_construction_round_trips_unique_pairs() {
    let pairs = vec![("a", 1), ("b", 2), ("c", 3)];
    let collection = Collection::from_pairs(pairs.clone());

    assert_eq!(collection.to_vec(), pairs);
    assert_eq!(collection.len(), pairs.len());
}

#[rstest]
fn test_collect_from_iterator() {
    let collection: Collection<&str, i32> = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(collection.len(), 2);
}

#[rstest]
fn test_clear_yields_empty_collection() {
    let cleared = sample().clear();
    assert!(cleared.is_empty());
    assert_eq!(cleared.len(), 0);
}

#[rstest]
fn test_borrowed_iteration_matches_slice() {
    let collection = sample();
    let pairs: Vec<(&&str, &i32)> = (&collection).into_iter().collect();
    assert_eq!(pairs, vec![(&"a", &1), (&"b", &2), (&"c", &3)]);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn test_get_and_contains_key() {
    let collection = sample();
    assert_eq!(collection.get(&"b"), Some(&2));
    assert_eq!(collection.get(&"z"), None);
    assert!(collection.contains_key(&"c"));
    assert!(!collection.contains_key(&"z"));
}

#[rstest]
fn test_contains_and_index_of_scan_in_order() {
    let collection = Collection::from_pairs(vec![("a", 7), ("b", 7), ("c", 8)]);
    assert!(collection.contains(&7));
    assert_eq!(collection.index_of(&7), Some(&"a"));
    assert_eq!(collection.occurrences_of(&7), 2);
}

#[rstest]
fn test_keys_and_values_reflect_iteration_order() {
    let reordered = sample().reverse();
    assert_eq!(reordered.keys().collect::<Vec<_>>(), vec![&"c", &"b", &"a"]);
    assert_eq!(reordered.values().collect::<Vec<_>>(), vec![&3, &2, &1]);
}

// =============================================================================
// Updates
// =============================================================================

#[rstest]
fn test_set_get_remove_round_trip() {
    let collection = sample().set("d", 4);
    assert_eq!(collection.get(&"d"), Some(&4));

    let (collection, removed) = collection.remove(&"d");
    assert_eq!(removed, Some(4));
    assert_eq!(collection.get(&"d"), None);
}

#[rstest]
fn test_set_preserves_position_of_existing_key() {
    let updated = sample().set("b", 20);
    assert_eq!(updated.to_vec(), vec![("a", 1), ("b", 20), ("c", 3)]);
}

#[rstest]
fn test_add_allocates_disjoint_integer_keys() {
    let collection: Collection<i64, &str> = Collection::new().set(4, "e").add("f");
    assert_eq!(collection.get(&5), Some(&"f"));

    let empty_append: Collection<usize, &str> = Collection::new().add("first");
    assert_eq!(empty_append.to_vec(), vec![(0, "first")]);
}

#[rstest]
fn test_remove_element_reports_absence() {
    let (unchanged, found) = sample().remove_element(&99);
    assert!(!found);
    assert_eq!(unchanged, sample());
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn test_filter_scenario() {
    let kept = sample().filter(|value| *value > 1);
    assert_eq!(kept.to_vec(), vec![("b", 2), ("c", 3)]);
}

#[rstest]
fn test_map_scenario_preserves_keys_and_order() {
    let mapped = sample().map(|value| value * 10);
    assert_eq!(mapped.to_vec(), vec![("a", 10), ("b", 20), ("c", 30)]);
}

#[rstest]
fn test_slice_scenario() {
    assert_eq!(sample().slice(1, Some(1)).to_vec(), vec![("b", 2)]);
}

#[rstest]
fn test_slice_clamps_instead_of_failing() {
    assert!(sample().slice(42, Some(3)).is_empty());
    assert_eq!(sample().slice(-1, None).to_vec(), vec![("c", 3)]);
    assert_eq!(sample().slice(1, Some(99)).len(), 2);
}

#[rstest]
fn test_reverse_is_an_involution() {
    let collection = sample();
    assert_eq!(collection.reverse().reverse().to_vec(), collection.to_vec());
}

#[rstest]
fn test_reverse_keeps_keys_attached_to_values() {
    let reversed = sample().reverse();
    assert_eq!(reversed.get(&"a"), Some(&1));
    assert_eq!(reversed.to_vec(), vec![("c", 3), ("b", 2), ("a", 1)]);
}

#[rstest]
fn test_sort_by_value_and_by_key() {
    let collection = Collection::from_pairs(vec![("b", 3), ("c", 1), ("a", 2)]);

    let by_value = collection.sort_by(|left, right| left.cmp(right));
    assert_eq!(by_value.to_vec(), vec![("c", 1), ("a", 2), ("b", 3)]);

    let by_key = collection.sort_keys_by(|left, right| left.cmp(right));
    assert_eq!(by_key.to_vec(), vec![("a", 2), ("b", 3), ("c", 1)]);
}

#[rstest]
fn test_shuffle_is_a_reordering_only() {
    let collection = sample();
    let shuffled = collection.shuffle();

    assert_eq!(shuffled.len(), collection.len());
    assert!(collection.equitable([&shuffled]));
}

#[rstest]
fn test_filter_keys_uses_keys_only() {
    let kept = sample().filter_keys(|key| *key != "b");
    assert_eq!(kept.to_vec(), vec![("a", 1), ("c", 3)]);
}

// =============================================================================
// Aggregates
// =============================================================================

#[rstest]
fn test_exists_short_circuits_true() {
    let seen = std::cell::Cell::new(0);

    let found = sample().exists(|_, value| {
        seen.set(seen.get() + 1);
        *value == 1
    });

    assert!(found);
    assert_eq!(seen.get(), 1);
}

#[rstest]
fn test_for_all_short_circuits_false() {
    let seen = std::cell::Cell::new(0);

    let all = sample().for_all(|_, value| {
        seen.set(seen.get() + 1);
        *value > 1
    });

    assert!(!all);
    assert_eq!(seen.get(), 1);
}

#[rstest]
fn test_find_and_find_key() {
    let collection = sample();
    assert_eq!(collection.find(|value| *value > 1), Some(&2));
    assert_eq!(collection.find_key(|key| key.starts_with('c')), Some(&"c"));
    assert_eq!(collection.find(|value| *value > 9), None);
}

#[rstest]
fn test_partition_law() {
    let collection = sample();
    let (matching, rest) = collection.partition(|_, value| *value != 2);

    assert_eq!(matching.len() + rest.len(), collection.len());
    for (key, value) in &collection {
        let in_matching = matching.get(key) == Some(value);
        let in_rest = rest.get(key) == Some(value);
        assert!(in_matching != in_rest);
    }
}

// =============================================================================
// Combination and equality
// =============================================================================

#[rstest]
fn test_union_leaves_inputs_unmodified() {
    let left = sample();
    let right = Collection::from_pairs(vec![("c", 30), ("d", 4)]);

    let union = left.union(&right);

    assert_eq!(union.to_vec(), vec![("a", 1), ("b", 2), ("c", 30), ("d", 4)]);
    assert_eq!(left.get(&"c"), Some(&3));
    assert_eq!(right.len(), 2);
}

#[rstest]
fn test_union_count_is_at_least_both_inputs() {
    let left = sample();
    let right = Collection::from_pairs(vec![("x", 9)]);
    let union = left.union(&right);

    assert!(union.len() >= left.len());
    assert!(union.len() >= right.len());
}

#[rstest]
fn test_intersect_is_key_and_value_intersection() {
    let left = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
    let right = Collection::from_pairs(vec![("a", 1), ("b", 9), ("d", 3)]);

    // "b" shares a key but not a value; "d" shares a value but not a key
    assert_eq!(left.intersect(&right).to_vec(), vec![("a", 1)]);
}

#[rstest]
fn test_symmetric_difference_drops_only_shared_pairs() {
    let left = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    let right = Collection::from_pairs(vec![("b", 2), ("c", 3)]);

    let difference = left.symmetric_difference(&right);
    assert_eq!(difference.to_vec(), vec![("a", 1), ("c", 3)]);
}

#[rstest]
fn test_symmetric_difference_never_removes_by_value_alone() {
    // Equal values under distinct keys must both survive
    let left = Collection::from_pairs(vec![("a", 5), ("b", 2)]);
    let right = Collection::from_pairs(vec![("b", 2), ("c", 5)]);

    let difference = left.symmetric_difference(&right);
    assert_eq!(difference.to_vec(), vec![("a", 5), ("c", 5)]);
}

#[rstest]
fn test_equitable_across_many_collections() {
    let base = sample();
    let shuffled = base.shuffle();
    let sorted = base.sort_by(|left, right| right.cmp(left));

    assert!(base.equitable([&shuffled, &sorted]));
    assert!(!base.equitable([&shuffled, &base.set("a", 99)]));
}

#[rstest]
fn test_equality_is_order_sensitive() {
    let ordered = sample();
    let reversed = ordered.reverse();

    assert_ne!(ordered, reversed);
    assert!(ordered.equitable([&reversed]));
}

// =============================================================================
// Cursor
// =============================================================================

#[rstest]
fn test_two_cursors_are_independent() {
    let collection = sample();
    let mut first_cursor = collection.cursor();
    let mut second_cursor = collection.cursor();

    assert_eq!(first_cursor.next(), Some(&2));
    assert_eq!(second_cursor.current(), Some(&1));
    assert_eq!(second_cursor.last(), Some(&3));
    assert_eq!(first_cursor.key(), Some(&"b"));
}
