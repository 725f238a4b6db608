// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! The ordering capability stored values must provide.
//!
//! The skip list never looks at keys when ordering; it only asks values
//! whether one strictly precedes another. The relation must be a strict
//! total order: irreflexive, transitive, and total over distinct values.
//! If two distinct entries can compare equal, value-based operations
//! (`find`, `remove_by_value`, rank queries) act on whichever of them the
//! search reaches first. Fold a tie-break (usually the key) into
//! `precedes` to avoid that.

use std::cmp::Reverse;
use std::rc::Rc;
use std::sync::Arc;

/// A strict ordering between values of the same type.
pub trait Precedes {
    /// Returns true if `self` sorts strictly before `other`.
    fn precedes(&self, other: &Self) -> bool;

    /// Neither value precedes the other.
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        !self.precedes(other) && !other.precedes(self)
    }
}

macro_rules! precedes_by_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Precedes for $ty {
                #[inline]
                fn precedes(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

precedes_by_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

impl<T: Precedes + ?Sized> Precedes for &T {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (**self).precedes(*other)
    }
}

impl<T: Precedes + ?Sized> Precedes for Box<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (**self).precedes(other)
    }
}

impl<T: Precedes + ?Sized> Precedes for Rc<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (**self).precedes(other)
    }
}

impl<T: Precedes + ?Sized> Precedes for Arc<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (**self).precedes(other)
    }
}

/// Descending order.
impl<T: Precedes> Precedes for Reverse<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        other.0.precedes(&self.0)
    }
}

/// Lexicographic: the first component decides unless the two are equivalent.
impl<A: Precedes, B: Precedes> Precedes for (A, B) {
    fn precedes(&self, other: &Self) -> bool {
        if self.0.precedes(&other.0) {
            return true;
        }
        if other.0.precedes(&self.0) {
            return false;
        }
        self.1.precedes(&other.1)
    }
}

impl<A: Precedes, B: Precedes, C: Precedes> Precedes for (A, B, C) {
    fn precedes(&self, other: &Self) -> bool {
        if self.0.precedes(&other.0) {
            return true;
        }
        if other.0.precedes(&self.0) {
            return false;
        }
        (&self.1, &self.2).precedes(&(&other.1, &other.2))
    }
}
