//! Unit tests for Set.
//!
//! Exercises the normalization invariant: values unique under strict
//! equality, keys a dense zero-based sequence after every mutation.

use primus::collection::Set;
use rstest::rstest;

fn dense_keys<T: Clone + PartialEq>(set: &Set<T>) -> bool {
    set.keys() == (0..set.len()).collect::<Vec<_>>()
}

#[rstest]
fn test_construction_scenario() {
    let set = Set::from_values(vec!["x", "y", "x", "z"]);

    assert_eq!(set.to_vec(), vec!["x", "y", "z"]);
    assert_eq!(set.keys(), vec![0, 1, 2]);
}

#[rstest]
fn test_count_equals_distinct_values() {
    let set = Set::from_values(vec![1, 1, 2, 3, 2, 1]);
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_add_skips_present_value() {
    let set = Set::from_values(vec![1, 2]);

    assert_eq!(set.add(2), set);
    assert_eq!(set.add(3).to_vec(), vec![1, 2, 3]);
    assert!(dense_keys(&set.add(3)));
}

#[rstest]
fn test_every_mutator_restores_the_invariant() {
    let set = Set::from_values(vec![4, 1, 3, 2]);

    let mutations = vec![
        set.set(0, 3),
        set.remove(&3).0,
        set.filter(|value| value % 2 == 0),
        set.map(|value| value / 2),
        set.sort_by(|left, right| left.cmp(right)),
        set.reverse(),
        set.merge(&Set::from_values(vec![2, 9])),
    ];

    for mutated in mutations {
        assert!(dense_keys(&mutated));
        for (position, value) in mutated.to_vec().iter().enumerate() {
            assert_eq!(mutated.to_vec().iter().position(|v| v == value), Some(position));
        }
    }
}

#[rstest]
fn test_filter_compacts_keys() {
    let set = Set::from_values(vec![10, 20, 30, 40]);
    let kept = set.filter(|value| *value > 15);

    assert_eq!(kept.to_vec(), vec![20, 30, 40]);
    assert_eq!(kept.keys(), vec![0, 1, 2]);
    assert_eq!(kept.get(0), Some(&20));
}

#[rstest]
fn test_map_keeps_first_occurrence_on_collision() {
    let set = Set::from_values(vec!["apple", "avocado", "banana"]);
    let initials = set.map(|value| value.chars().next());

    assert_eq!(initials.to_vec(), vec![Some('a'), Some('b')]);
}

#[rstest]
fn test_merge_keeps_left_side_order() {
    let left = Set::from_values(vec!["b", "a"]);
    let right = Set::from_values(vec!["a", "c"]);

    assert_eq!(left.merge(&right).to_vec(), vec!["b", "a", "c"]);
}

#[rstest]
fn test_clear_and_default() {
    let set = Set::from_values(vec![1, 2, 3]);
    assert!(set.clear().is_empty());
    assert!(Set::<i32>::default().is_empty());
}

#[rstest]
fn test_contains_uses_strict_equality() {
    let set = Set::from_values(vec!["1"]);
    assert!(set.contains(&"1"));
    assert!(!set.contains(&"01"));
}

#[rstest]
fn test_collect_from_iterator_of_values() {
    let set: Set<i32> = vec![3, 3, 1].into_iter().collect();
    assert_eq!(set.to_vec(), vec![3, 1]);
}
