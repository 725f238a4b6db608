// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! Unsynchronized ranked skip list.
//!
//! Entries are `(key, value)` pairs. Keys are unique and looked up through a
//! hash index in O(1); values are kept in ascending [`Precedes`] order so
//! value search and both directions of rank lookup cost O(log n) expected.
//!
//! # Operations
//!
//! - `set(key, value)`: O(log n) - insert, or replace and reposition
//! - `remove(key)` / `remove_by_node(id)` / `remove_by_value(value)`: O(log n)
//! - `get(key)`: O(1)
//! - `find(value)`: O(log n) - first entry not preceding `value`
//! - `rank_of_key(key)` / `rank_of_value(value)`: O(log n) - 1-based, 0 if absent
//! - `node_at_rank(rank)`: O(log n)
//! - `front()` / `back()` / `len()`: O(1)
//!
//! [`SkipList`](crate::SkipList) wraps this type in a reader/writer lock.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

use crate::level::{MAX_LEVEL, draw_height};
use crate::node::{HEAD, Idx, Level, NIL, Node, NodeId, NodeRef, Slot};
use crate::order::Precedes;

/// Predecessors recorded on the way down to a position.
struct Path {
    /// Last node at each level that precedes the position.
    update: [Idx; MAX_LEVEL],
    /// Rank of `update[level]`.
    rank: [usize; MAX_LEVEL],
}

/// A ranked skip list without internal locking.
pub struct RawSkipList<K, V> {
    /// Arena of nodes.
    slots: Vec<Slot<K, V>>,
    /// Vacant slots, reused before the arena grows.
    free_list: Vec<Idx>,
    /// Header sentinel links, one per supported level.
    head: [Level; MAX_LEVEL],
    /// Last node, or NIL when empty.
    tail: Idx,
    /// Levels in use, always at least 1.
    height: usize,
    /// Number of live nodes.
    len: usize,
    /// Key to arena index.
    index: FxHashMap<K, Idx>,
    /// Random state for height draws.
    rng: StdRng,
}

impl<K, V> RawSkipList<K, V> {
    /// An empty list seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An empty list with a reproducible height sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RawSkipList {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: [Level::EMPTY; MAX_LEVEL],
            tail: NIL,
            height: 1,
            len: 0,
            index: FxHashMap::default(),
            rng,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Levels currently in use.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn front(&self) -> Option<NodeRef<'_, K, V>> {
        self.view(self.head[0].forward)
    }

    pub fn back(&self) -> Option<NodeRef<'_, K, V>> {
        self.view(self.tail)
    }

    /// Drop every entry. Handles issued before the reset stop resolving.
    pub fn reset(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(i as Idx);
            }
        }
        self.head = [Level::EMPTY; MAX_LEVEL];
        self.tail = NIL;
        self.height = 1;
        self.len = 0;
        self.index.clear();
    }

    /// Resolve a handle to a view, if its node is still live.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K, V>> {
        self.resolve(id).and_then(|idx| self.view(idx))
    }

    /// Iterate entries in ascending value order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            front: self.head[0].forward,
            back: self.tail,
            remaining: self.len,
        }
    }

    // --- Node access helpers ---

    #[inline]
    pub(crate) fn node_at(&self, idx: Idx) -> &Node<K, V> {
        match &self.slots[idx as usize].node {
            Some(node) => node,
            None => unreachable!("link to vacant slot {}", idx),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut Node<K, V> {
        match &mut self.slots[idx as usize].node {
            Some(node) => node,
            None => unreachable!("link to vacant slot {}", idx),
        }
    }

    /// Link `level` of `idx`, where `idx` may be the header.
    #[inline]
    fn link(&self, idx: Idx, level: usize) -> Level {
        if idx == HEAD {
            self.head[level]
        } else {
            self.node_at(idx).levels[level]
        }
    }

    #[inline]
    fn link_mut(&mut self, idx: Idx, level: usize) -> &mut Level {
        if idx == HEAD {
            &mut self.head[level]
        } else {
            &mut self.node_mut(idx).levels[level]
        }
    }

    pub(crate) fn view(&self, idx: Idx) -> Option<NodeRef<'_, K, V>> {
        if idx == NIL || idx == HEAD {
            return None;
        }
        Some(NodeRef { list: self, index: idx })
    }

    pub(crate) fn id_of(&self, idx: Idx) -> NodeId {
        NodeId {
            index: idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    pub(crate) fn resolve(&self, id: NodeId) -> Option<Idx> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation == id.generation && slot.node.is_some() {
            Some(id.index)
        } else {
            None
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize].node = Some(node);
            idx
        } else {
            let idx = self.slots.len() as Idx;
            assert!(idx < HEAD, "skip list arena exhausted");
            self.slots.push(Slot {
                node: Some(node),
                generation: 0,
            });
            idx
        }
    }

    fn release(&mut self, idx: Idx) -> Node<K, V> {
        let slot = &mut self.slots[idx as usize];
        let Some(node) = slot.node.take() else {
            unreachable!("release of vacant slot {}", idx);
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(idx);
        node
    }

    /// Predecessors of `idx` at every active level, found by walking
    /// backward links. Exact even when values tie.
    fn path_to_node(&self, idx: Idx) -> [Idx; MAX_LEVEL] {
        let mut update = [HEAD; MAX_LEVEL];
        let mut x = self.node_at(idx).backward;
        for (level, pred) in update.iter_mut().enumerate().take(self.height) {
            while x != NIL && self.node_at(x).height() <= level {
                x = self.node_at(x).backward;
            }
            if x == NIL {
                // Everything above this level hangs off the header.
                break;
            }
            *pred = x;
        }
        update
    }

    /// Unlink `idx`, given its predecessor at every active level.
    fn delete(&mut self, idx: Idx, update: &[Idx; MAX_LEVEL]) -> (K, V)
    where
        K: Eq + Hash,
    {
        let target_height = self.node_at(idx).height();
        for level in 0..self.height {
            let target = if level < target_height {
                Some(self.node_at(idx).levels[level])
            } else {
                None
            };
            let pred = self.link_mut(update[level], level);
            match target {
                Some(target) if pred.forward == idx => {
                    pred.span += target.span;
                    pred.span -= 1;
                    pred.forward = target.forward;
                }
                // The removed node was skipped over at this level.
                _ => pred.span -= 1,
            }
        }

        let next = self.node_at(idx).levels[0].forward;
        let backward = self.node_at(idx).backward;
        if next == NIL {
            self.tail = backward;
        } else {
            self.node_mut(next).backward = backward;
        }

        while self.height > 1 && self.head[self.height - 1].forward == NIL {
            self.height -= 1;
        }

        self.len -= 1;
        let node = self.release(idx);
        self.index.remove(&node.key);
        (node.key, node.value)
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self)
    where
        K: Eq + Hash,
    {
        // Invariant 1: level 0 links agree in both directions and cover len nodes
        let mut count = 0usize;
        let mut prev = NIL;
        let mut idx = self.head[0].forward;
        while idx != NIL {
            let node = self.node_at(idx);
            assert_eq!(
                node.backward, prev,
                "INVARIANT VIOLATED: backward of slot {} is {}, expected {}",
                idx, node.backward, prev
            );
            assert_eq!(
                self.index.get(&node.key),
                Some(&idx),
                "INVARIANT VIOLATED: slot {} missing from the key index",
                idx
            );
            count += 1;
            prev = idx;
            idx = node.levels[0].forward;
        }
        assert_eq!(count, self.len, "INVARIANT VIOLATED: walked {} nodes, len={}", count, self.len);
        assert_eq!(prev, self.tail, "INVARIANT VIOLATED: tail mismatch");
        assert_eq!(
            self.index.len(),
            self.len,
            "INVARIANT VIOLATED: index holds {} keys, len={}",
            self.index.len(),
            self.len
        );

        // Invariant 2: spans along every active level sum to len
        for level in 0..self.height {
            let mut total = 0usize;
            let mut x = HEAD;
            loop {
                let link = self.link(x, level);
                total += link.span;
                if link.forward == NIL {
                    break;
                }
                x = link.forward;
            }
            assert_eq!(
                total, self.len,
                "INVARIANT VIOLATED: spans at level {} sum to {}, len={}",
                level, total, self.len
            );
        }

        // Invariant 3: height is minimal
        if self.height > 1 {
            assert_ne!(
                self.head[self.height - 1].forward,
                NIL,
                "INVARIANT VIOLATED: top level {} is empty",
                self.height - 1
            );
        }
        for level in self.height..MAX_LEVEL {
            assert_eq!(self.head[level].forward, NIL, "INVARIANT VIOLATED: link above height");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

impl<K, V> RawSkipList<K, V>
where
    K: Eq + Hash + Clone,
    V: Precedes,
{
    /// Insert `value` under `key`, replacing and repositioning any value
    /// already stored there.
    pub fn set(&mut self, key: K, value: V) -> NodeId {
        self.remove(&key);

        let mut path = self.path_to_value(&value);
        let height = draw_height(&mut self.rng);
        if height > self.height {
            for level in self.height..height {
                path.update[level] = HEAD;
                path.rank[level] = 0;
                self.head[level].span = self.len;
            }
            self.height = height;
        }

        let idx = self.alloc(Node::new(height, key.clone(), value));
        for level in 0..height {
            let pred = path.update[level];
            let old = self.link(pred, level);
            // Nodes between update[level] and the insertion point.
            let crossed = path.rank[0] - path.rank[level];
            self.node_mut(idx).levels[level] = Level {
                forward: old.forward,
                span: old.span - crossed,
            };
            *self.link_mut(pred, level) = Level {
                forward: idx,
                span: crossed + 1,
            };
        }

        // Levels the new node passes under.
        for level in height..self.height {
            self.link_mut(path.update[level], level).span += 1;
        }

        let pred = path.update[0];
        self.node_mut(idx).backward = if pred == HEAD { NIL } else { pred };
        let next = self.node_at(idx).levels[0].forward;
        if next == NIL {
            self.tail = idx;
        } else {
            self.node_mut(next).backward = idx;
        }

        self.len += 1;
        self.index.insert(key, idx);
        self.check_invariants();

        self.id_of(idx)
    }

    /// Remove the entry stored under `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key)?;
        let update = self.path_to_node(idx);
        let (_, value) = self.delete(idx, &update);
        self.check_invariants();
        Some(value)
    }

    /// Remove exactly the node `id` names. A stale handle is a no-op.
    pub fn remove_by_node(&mut self, id: NodeId) -> Option<V> {
        let idx = self.resolve(id)?;
        let update = self.path_to_node(idx);
        let (_, value) = self.delete(idx, &update);
        self.check_invariants();
        Some(value)
    }

    /// Remove the first entry whose value is equivalent to `value`.
    pub fn remove_by_value(&mut self, value: &V) -> Option<V> {
        let path = self.path_to_value(value);
        let idx = self.link(path.update[0], 0).forward;
        if idx == NIL || value.precedes(&self.node_at(idx).value) {
            return None;
        }
        let (_, removed) = self.delete(idx, &path.update);
        self.check_invariants();
        Some(removed)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.node_at(idx).value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// The node stored under `key`.
    pub fn get_node<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).and_then(|&idx| self.view(idx))
    }

    /// Lower bound: the first node whose value does not precede `value`.
    pub fn find(&self, value: &V) -> Option<NodeRef<'_, K, V>> {
        let path = self.path_to_value(value);
        self.view(self.link(path.update[0], 0).forward)
    }

    /// The first node whose value is equivalent to `value`.
    pub fn find_equal(&self, value: &V) -> Option<NodeRef<'_, K, V>> {
        self.find(value).filter(|node| !value.precedes(node.value()))
    }

    /// 1-based rank of the value stored under `key`, or 0.
    pub fn rank_of_key<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&idx) => self.rank_of_value(&self.node_at(idx).value),
            None => 0,
        }
    }

    /// 1-based rank of the first node found equivalent to `value`, or 0.
    pub fn rank_of_value(&self, value: &V) -> usize {
        let mut x = HEAD;
        let mut rank = 0;
        for level in (0..self.height).rev() {
            loop {
                let link = self.link(x, level);
                if link.forward == NIL || !self.node_at(link.forward).value.precedes(value) {
                    break;
                }
                rank += link.span;
                x = link.forward;
            }
            // The forward node does not precede `value`; equal if `value`
            // does not precede it either.
            let link = self.link(x, level);
            if link.forward != NIL && !value.precedes(&self.node_at(link.forward).value) {
                return rank + link.span;
            }
        }
        0
    }

    /// The node at 1-based `rank`.
    pub fn node_at_rank(&self, rank: usize) -> Option<NodeRef<'_, K, V>> {
        if rank == 0 || rank > self.len {
            return None;
        }
        let mut x = HEAD;
        let mut traversed = 0;
        for level in (0..self.height).rev() {
            loop {
                let link = self.link(x, level);
                if link.forward == NIL || traversed + link.span > rank {
                    break;
                }
                traversed += link.span;
                x = link.forward;
            }
            if traversed == rank {
                return self.view(x);
            }
        }
        None
    }

    /// The first `n` nodes in order, or all of them when `n` is negative.
    pub fn top(&self, n: isize) -> Vec<NodeRef<'_, K, V>> {
        let limit = usize::try_from(n).map_or(self.len, |n| n.min(self.len));
        let mut out = Vec::with_capacity(limit);
        let mut cursor = self.front();
        while let Some(node) = cursor {
            if out.len() == limit {
                break;
            }
            out.push(node);
            cursor = node.next();
        }
        out
    }

    /// Descend toward the first position whose value does not precede
    /// `value`, recording the predecessor and its rank at every level.
    fn path_to_value(&self, value: &V) -> Path {
        let mut path = Path {
            update: [HEAD; MAX_LEVEL],
            rank: [0; MAX_LEVEL],
        };
        let mut x = HEAD;
        let mut traversed = 0;
        for level in (0..self.height).rev() {
            loop {
                let link = self.link(x, level);
                if link.forward == NIL || !self.node_at(link.forward).value.precedes(value) {
                    break;
                }
                traversed += link.span;
                x = link.forward;
            }
            path.update[level] = x;
            path.rank[level] = traversed;
        }
        path
    }
}

impl<K, V> Default for RawSkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for RawSkipList<K, V>
where
    K: Eq + Hash + Clone,
    V: Precedes,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RawSkipList<K, V>
where
    K: Eq + Hash + Clone,
    V: Precedes,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = RawSkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, K, V> IntoIterator for &'a RawSkipList<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-level dump, one line per active level from the top down.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RawSkipList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RawSkipList {{ len: {}, height: {} }}", self.len, self.height)?;
        for level in (0..self.height).rev() {
            write!(f, "  L{}: HEAD", level)?;
            let mut x = HEAD;
            loop {
                let link = self.link(x, level);
                if link.forward == NIL {
                    writeln!(f, " -({})-> nil", link.span)?;
                    break;
                }
                let node = self.node_at(link.forward);
                write!(f, " -({})-> {:?}={:?}", link.span, node.key, node.value)?;
                x = link.forward;
            }
        }
        Ok(())
    }
}

/// Borrowed iterator over `(key, value)` in ascending value order.
pub struct Iter<'a, K, V> {
    list: &'a RawSkipList<K, V>,
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node_at(self.front);
        self.front = node.levels[0].forward;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node_at(self.back);
        self.back = node.backward;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
