// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! Skiprank - a ranked skip list for sorted sets and leaderboards.
//!
//! Entries are `(key, value)` pairs kept in ascending value order. Keys
//! give O(1) upsert and lookup; values give O(log n) search and O(log n)
//! rank queries in both directions.
//!
//! # Quick Start
//!
//! ```
//! use std::cmp::Reverse;
//! use skiprank::SkipList;
//!
//! // Highest score first, ties broken by player id.
//! let board = SkipList::new();
//! board.set("ada", (Reverse(1200), "ada"));
//! board.set("bob", (Reverse(900), "bob"));
//! board.set("cy", (Reverse(1500), "cy"));
//!
//! assert_eq!(board.rank_of_key("ada"), 2);
//!
//! // Raising a score moves the entry.
//! board.set("bob", (Reverse(2000), "bob"));
//! let names: Vec<_> = board.top(-1).into_iter().map(|(k, _)| k).collect();
//! assert_eq!(names, ["bob", "cy", "ada"]);
//! ```
//!
//! Values only need [`Precedes`], a strict "sorts before" relation. It must
//! be a strict total order; see [`order`] for what happens on ties.

pub mod level;
pub mod node;
pub mod order;
pub mod raw;
pub mod skip_list;

// Re-exports for convenience
pub use node::NodeId;
pub use node::NodeRef;
pub use order::Precedes;
pub use raw::RawSkipList;
pub use skip_list::ReadGuard;
pub use skip_list::SkipList;
