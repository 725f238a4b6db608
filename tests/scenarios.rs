// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! Ordering, removal and rank scenarios through the public API.

use skiprank::{Precedes, RawSkipList, SkipList};

// =============================================================================
// Helper types
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    score: i64,
}

/// Higher score first, ties broken by lower id.
impl Precedes for User {
    fn precedes(&self, other: &Self) -> bool {
        self.score > other.score || (self.score == other.score && self.id < other.id)
    }
}

fn user(id: u32, score: i64) -> User {
    User { id, score }
}

fn forward_values<V: Clone>(list: &SkipList<u32, V>) -> Vec<V> {
    let guard = list.read();
    let mut out = Vec::new();
    let mut node = guard.front();
    while let Some(n) = node {
        out.push(n.value().clone());
        node = n.next();
    }
    out
}

fn backward_values<V: Clone>(list: &SkipList<u32, V>) -> Vec<V> {
    let guard = list.read();
    let mut out = Vec::new();
    let mut node = guard.back();
    while let Some(n) = node {
        out.push(n.value().clone());
        node = n.previous();
    }
    out
}

fn int_list() -> SkipList<u32, i32> {
    let list = SkipList::with_seed(0xb0b);
    for (key, value) in [1, 3, 2, -999, -888, 888, 999, 1000].into_iter().enumerate() {
        list.set(key as u32 + 1, value);
    }
    list
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn leaderboard_order() {
    let list = SkipList::with_seed(1);
    let scores = [123, 1234, 12345, 258, 147, 369, 888, 888];
    for (i, score) in scores.into_iter().enumerate() {
        let id = i as u32 + 1;
        list.set(id, user(id, score));
    }
    assert_eq!(list.len(), scores.len());

    let ids: Vec<u32> = forward_values(&list).iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 2, 7, 8, 6, 4, 5, 1]);

    assert_eq!(list.get(&8).map(|u| u.score), Some(888));
    assert_eq!(list.get(&1).map(|u| u.score), Some(123));
}

#[test]
fn leaderboard_updates_and_removals() {
    let list = SkipList::with_seed(2);
    for (i, score) in [123, 1234, 12345, 258, 147, 369, 888, 888].into_iter().enumerate() {
        let id = i as u32 + 1;
        list.set(id, user(id, score));
    }

    list.set(1, user(1, 2555));
    assert_eq!(list.len(), 8);
    assert_eq!(list.get(&1), Some(user(1, 2555)));
    assert_eq!(list.rank_of_key(&1), 2);

    assert_eq!(list.remove(&4), Some(user(4, 258)));
    assert_eq!(list.get(&4), None);
    assert_eq!(list.remove(&8), Some(user(8, 888)));
    assert_eq!(list.len(), 6);

    let ids: Vec<u32> = forward_values(&list).iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 7, 6, 5]);
}

#[test]
fn integers_ascend_front_to_back() {
    let list = int_list();
    assert_eq!(forward_values(&list), vec![-999, -888, 1, 2, 3, 888, 999, 1000]);

    // Walking on from a found node continues in order.
    let guard = list.read();
    let mut node = guard.find_equal(&2);
    let mut tail = Vec::new();
    while let Some(n) = node {
        tail.push(*n.value());
        node = n.next();
    }
    assert_eq!(tail, vec![2, 3, 888, 999, 1000]);
}

#[test]
fn front_and_back_track_inserts() {
    let list = SkipList::with_seed(3);
    assert_eq!(list.len(), 0);
    assert!(list.front().is_none());
    assert!(list.back().is_none());

    list.set(1, 1);
    assert_eq!(list.front().and_then(|id| list.value(id)), Some(1));
    assert_eq!(list.back().and_then(|id| list.value(id)), Some(1));

    list.set(2, 3);
    assert_eq!(list.front().and_then(|id| list.value(id)), Some(1));
    assert_eq!(list.back().and_then(|id| list.value(id)), Some(3));

    list.set(3, 2);
    assert_eq!(list.front().and_then(|id| list.value(id)), Some(1));
    assert_eq!(list.back().and_then(|id| list.value(id)), Some(3));
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn removals_keep_reverse_order() {
    let list = int_list();
    let two = list.find_equal(&2).unwrap();
    assert_eq!(list.remove_by_node(two), Some(2));
    assert_eq!(list.remove_by_value(&888), Some(888));
    assert_eq!(list.remove_by_value(&1000), Some(1000));

    assert_eq!(backward_values(&list), vec![999, 3, 1, -888, -999]);
}

#[test]
fn removing_ends_moves_front_and_back() {
    let list = int_list();
    for v in [2, 888, 1000] {
        list.remove_by_value(&v);
    }

    list.remove_by_node(list.front().unwrap());
    assert_eq!(list.front().and_then(|id| list.value(id)), Some(-888));
    assert_eq!(list.back().and_then(|id| list.value(id)), Some(999));

    list.remove_by_node(list.back().unwrap());
    assert_eq!(list.front().and_then(|id| list.value(id)), Some(-888));
    assert_eq!(list.back().and_then(|id| list.value(id)), Some(3));
}

#[test]
fn absent_removals_are_noops() {
    let list = int_list();
    assert_eq!(list.remove(&99_999), None);
    assert_eq!(list.remove_by_value(&123), None);
    assert_eq!(list.len(), 8);
}

#[test]
fn equal_values_stay_together() {
    let list = SkipList::with_seed(4);
    list.set(1, 3);
    list.set(100, 2);
    list.set(200, 2);
    list.set(201, 2);
    list.set(202, 1);

    let guard = list.read();
    let mut node = guard.find(&2);
    let mut run = Vec::new();
    while let Some(n) = node {
        run.push(*n.value());
        node = n.next();
    }
    assert_eq!(run, vec![2, 2, 2, 3]);
}

#[test]
fn reset_empties_everything() {
    let list = int_list();
    list.reset();
    assert_eq!(list.len(), 0);
    assert!(list.front().is_none());
    assert!(list.back().is_none());
    assert_eq!(list.height(), 1);
}

// =============================================================================
// Ranks
// =============================================================================

#[test]
fn ranks_of_one_to_ten() {
    let list = SkipList::with_seed(5);
    for i in 1..=10 {
        list.set(i as u32, i);
    }
    for i in 1..=10 {
        assert_eq!(list.rank_of_value(&i), i as usize);
        let id = list.node_at_rank(i as usize).unwrap();
        assert_eq!(list.value(id), Some(i));
    }
    assert_eq!(list.rank_of_value(&0), 0);
    assert_eq!(list.rank_of_value(&11), 0);
    assert!(list.node_at_rank(0).is_none());
    assert!(list.node_at_rank(11).is_none());
    assert!(list.node_at_rank(12).is_none());

    let guard = list.read();
    let mut node = guard.node_at_rank(7);
    let mut rest = Vec::new();
    while let Some(n) = node {
        rest.push(*n.value());
        node = n.next();
    }
    assert_eq!(rest, vec![7, 8, 9, 10]);
}

#[test]
fn ranks_match_sorted_order_at_scale() {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    let mut rng = StdRng::seed_from_u64(99);
    let mut list = RawSkipList::with_seed(6);
    let mut seen = BTreeSet::new();
    for key in 0..2_000u32 {
        let v: i64 = rng.gen_range(-1_000_000..1_000_000);
        if seen.insert(v) {
            list.set(key, v);
        }
    }

    let sorted: Vec<i64> = seen.into_iter().collect();
    assert_eq!(list.len(), sorted.len());
    for (i, v) in sorted.iter().enumerate() {
        assert_eq!(list.rank_of_value(v), i + 1);
        assert_eq!(list.node_at_rank(i + 1).map(|n| *n.value()), Some(*v));
    }
}

#[test]
fn rank_of_key_follows_updates() {
    let list = SkipList::with_seed(7);
    for k in 1..=5u32 {
        list.set(k, k as i32 * 10);
    }
    assert_eq!(list.rank_of_key(&5), 5);
    list.set(5, 0);
    assert_eq!(list.rank_of_key(&5), 1);
    assert_eq!(list.len(), 5);
    assert_eq!(list.rank_of_key(&42), 0);
}

#[test]
fn top_n() {
    let list = int_list();
    let first_three: Vec<i32> = list.top(3).into_iter().map(|(_, v)| v).collect();
    assert_eq!(first_three, vec![-999, -888, 1]);
    assert_eq!(list.top(-1).len(), 8);
    assert_eq!(list.top(50).len(), 8);
    assert!(list.top(0).is_empty());
}
