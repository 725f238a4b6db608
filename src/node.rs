// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! Skip list nodes and the handles that name them.
//!
//! Nodes live in an arena owned by the list and link to each other by
//! index. A node at height `h` has `h` forward links; each link records
//! its `span`, the number of level-0 steps from the node to the link's
//! target (the target counts, the origin does not). A link with no
//! target spans every node after its origin. Summing spans along a
//! descent gives the 1-based rank of where the descent stops.
//!
//! ```text
//! Level 2: HEAD -----(3)-----> C ------------(2)-> nil
//! Level 1: HEAD -(1)-> A -(2)-> C -(1)-> D -(1)-> nil
//! Level 0: HEAD -> A -> B -> C -> D -> E -> nil
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::raw::RawSkipList;

/// Arena index type. u32 halves link size vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Missing link.
pub(crate) const NIL: Idx = Idx::MAX;

/// The header sentinel. It has no arena slot; the list keeps its links inline.
pub(crate) const HEAD: Idx = Idx::MAX - 1;

/// Inline level capacity. Three quarters of all nodes have height <= 2.
const INLINE_LEVELS: usize = 4;

/// One forward link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Level {
    pub(crate) forward: Idx,
    pub(crate) span: usize,
}

impl Level {
    pub(crate) const EMPTY: Level = Level { forward: NIL, span: 0 };
}

/// A stored entry.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Level-0 predecessor, or NIL if this is the first node.
    pub(crate) backward: Idx,
    /// Forward links. The length is the node's height and never changes.
    pub(crate) levels: SmallVec<[Level; INLINE_LEVELS]>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(height: usize, key: K, value: V) -> Self {
        Node {
            key,
            value,
            backward: NIL,
            levels: SmallVec::from_elem(Level::EMPTY, height),
        }
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }
}

/// An arena slot. The generation is bumped every time the slot is vacated,
/// so ids handed out for an earlier occupant stop resolving.
pub(crate) struct Slot<K, V> {
    pub(crate) node: Option<Node<K, V>>,
    pub(crate) generation: u32,
}

/// An opaque handle to a node.
///
/// Handles are cheap to copy and stay valid until that node is removed,
/// either directly or because its key was set again. After that, every
/// operation given the handle reports "not found". A handle only means
/// something to the list that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: Idx,
    pub(crate) generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

/// A borrowed view of a live node.
///
/// The view borrows the list, so the structure cannot change while it is
/// held. From a [`SkipList`](crate::SkipList) that means holding its read
/// guard for as long as the traversal runs.
pub struct NodeRef<'a, K, V> {
    pub(crate) list: &'a RawSkipList<K, V>,
    pub(crate) index: Idx,
}

// Manual impls: derive would demand K: Clone and V: Clone.
impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    #[inline]
    fn node(&self) -> &'a Node<K, V> {
        self.list.node_at(self.index)
    }

    /// The key this node was stored under.
    #[inline]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    #[inline]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// The level-0 successor.
    pub fn next(&self) -> Option<NodeRef<'a, K, V>> {
        self.list.view(self.node().levels[0].forward)
    }

    /// The level-0 predecessor.
    pub fn previous(&self) -> Option<NodeRef<'a, K, V>> {
        self.list.view(self.node().backward)
    }

    /// How many levels this node participates in.
    pub fn height(&self) -> usize {
        self.node().height()
    }

    /// A detached handle to this node.
    pub fn id(&self) -> NodeId {
        self.list.id_of(self.index)
    }
}

impl<K, V> PartialEq for NodeRef<'_, K, V> {
    /// Same node of the same list.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<K, V> Eq for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}
