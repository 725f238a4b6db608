// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! Thread-safe ranked skip list.
//!
//! One reader/writer lock guards the whole structure: `set`, the removals
//! and `reset` take it exclusively; every other operation shares it.
//! Handles come back as [`NodeId`]s, so stepping with [`SkipList::next`]
//! or [`SkipList::previous`] retakes the lock each time, and whatever
//! writers did in between is visible. To walk a stable snapshot, hold
//! [`SkipList::read`] and traverse the [`NodeRef`](crate::NodeRef)s it hands out.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::node::NodeId;
use crate::order::Precedes;
use crate::raw::RawSkipList;

/// Shared access to a [`SkipList`]'s contents. Writers wait until it drops.
pub type ReadGuard<'a, K, V> = RwLockReadGuard<'a, RawSkipList<K, V>>;

/// A ranked skip list behind a single reader/writer lock.
pub struct SkipList<K, V> {
    inner: RwLock<RawSkipList<K, V>>,
}

impl<K, V> SkipList<K, V> {
    pub fn new() -> Self {
        SkipList {
            inner: RwLock::new(RawSkipList::new()),
        }
    }

    /// A list whose node heights are reproducible across runs.
    pub fn with_seed(seed: u64) -> Self {
        SkipList {
            inner: RwLock::new(RawSkipList::with_seed(seed)),
        }
    }

    /// Lock for reading and hand out the unsynchronized view.
    pub fn read(&self) -> ReadGuard<'_, K, V> {
        self.inner.read()
    }

    pub fn into_inner(self) -> RawSkipList<K, V> {
        self.inner.into_inner()
    }

    /// Drop every entry. Previously issued handles stop resolving.
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.read().height()
    }

    pub fn front(&self) -> Option<NodeId> {
        self.inner.read().front().map(|node| node.id())
    }

    pub fn back(&self) -> Option<NodeId> {
        self.inner.read().back().map(|node| node.id())
    }

    /// The level-0 successor of `id`, or `None` if there is none or `id`
    /// was removed since it was handed out.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let list = self.inner.read();
        list.node(id).and_then(|node| node.next()).map(|node| node.id())
    }

    /// The level-0 predecessor of `id`.
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        let list = self.inner.read();
        list.node(id).and_then(|node| node.previous()).map(|node| node.id())
    }

    /// A copy of the value at `id`.
    pub fn value(&self, id: NodeId) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().node(id).map(|node| node.value().clone())
    }

    /// A copy of the key at `id`.
    pub fn key(&self, id: NodeId) -> Option<K>
    where
        K: Clone,
    {
        self.inner.read().node(id).map(|node| node.key().clone())
    }
}

impl<K, V> SkipList<K, V>
where
    K: Eq + Hash + Clone,
    V: Precedes,
{
    /// Insert `value` under `key`, replacing any earlier value for the key.
    pub fn set(&self, key: K, value: V) -> NodeId {
        self.inner.write().set(key, value)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(key)
    }

    /// Remove the node `id` names, if it is still live.
    pub fn remove_by_node(&self, id: NodeId) -> Option<V> {
        self.inner.write().remove_by_node(id)
    }

    /// Remove the first entry equivalent to `value`.
    pub fn remove_by_value(&self, value: &V) -> Option<V> {
        self.inner.write().remove_by_value(value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// The first node whose value does not precede `value`.
    pub fn find(&self, value: &V) -> Option<NodeId> {
        self.inner.read().find(value).map(|node| node.id())
    }

    /// The first node equivalent to `value`.
    pub fn find_equal(&self, value: &V) -> Option<NodeId> {
        self.inner.read().find_equal(value).map(|node| node.id())
    }

    /// 1-based rank of the entry under `key`, or 0 if absent.
    pub fn rank_of_key<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().rank_of_key(key)
    }

    /// 1-based rank of an entry equivalent to `value`, or 0 if absent.
    pub fn rank_of_value(&self, value: &V) -> usize {
        self.inner.read().rank_of_value(value)
    }

    pub fn node_at_rank(&self, rank: usize) -> Option<NodeId> {
        self.inner.read().node_at_rank(rank).map(|node| node.id())
    }

    /// Copies of the first `n` entries, or all of them when `n` is negative.
    pub fn top(&self, n: isize) -> Vec<(K, V)>
    where
        V: Clone,
    {
        let list = self.inner.read();
        list.top(n)
            .into_iter()
            .map(|node| (node.key().clone(), node.value().clone()))
            .collect()
    }
}

impl<K, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<RawSkipList<K, V>> for SkipList<K, V> {
    fn from(list: RawSkipList<K, V>) -> Self {
        SkipList {
            inner: RwLock::new(list),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SkipList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner.read(), f)
    }
}
