//! Sift engine shared by every queue flavor.
//!
//! The engine only knows slots. What lives in a slot, how two slots are
//! ranked and what else must happen on a swap (like keeping a handle map in
//! sync) is up to the [`SiftTarget`].

use crate::derank::derank;
use crate::heap_primitives::Arity;

/// Slot-level view of a heap that the sift engine can reorder.
pub trait SiftTarget {
    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Must the entry at `i` sit above the one at `j`?
    fn outranks(&self, i: usize, j: usize) -> bool;

    /// Swaps two slots. Implementations keep any side tables in sync.
    fn swap(&mut self, i: usize, j: usize);
}

/// Raises the entry at `pos` until its parent outranks or ties it.
/// Returns its new slot.
#[inline(always)]
pub fn sift_up<A: Arity, T: SiftTarget + ?Sized>(arity: &A, t: &mut T, mut pos: usize) -> usize {
    debug_assert!(
        pos < t.len(),
        "Sift up from {pos} is OUT OF BOUNDS({})",
        t.len()
    );

    while pos > 0 {
        let parent = arity.parent(pos);
        if !t.outranks(pos, parent) {
            break;
        }
        t.swap(parent, pos);
        pos = parent;
    }
    pos
}

/// Lowers the entry at `pos`, each step swapping it with its best-ranked
/// child, until no child outranks it.
/// Returns its new slot.
#[inline(always)]
pub fn sift_down<A: Arity, T: SiftTarget + ?Sized>(arity: &A, t: &mut T, mut pos: usize) -> usize {
    let len = t.len();
    debug_assert!(pos < len, "Sift down from {pos} is OUT OF BOUNDS({len})");

    loop {
        let children = arity.child_range(pos, len);
        if children.is_empty() {
            break;
        }
        let child = derank(&*t, children);
        if !t.outranks(child, pos) {
            break;
        }
        t.swap(pos, child);
        pos = child;
    }
    pos
}

/// Restores heap order over arbitrary contents in linear time by sinking
/// every internal node, last parent first.
pub fn heapify<A: Arity, T: SiftTarget + ?Sized>(arity: &A, t: &mut T) {
    let len = t.len();
    if len < 2 {
        return;
    }
    let last_parent = arity.parent(len - 1);
    for k in (0..=last_parent).rev() {
        sift_down(arity, t, k);
    }
}

/// Checks that no entry outranks its parent.
#[cfg(any(test, feature = "inspect"))]
pub fn is_heap<A: Arity, T: SiftTarget + ?Sized>(arity: &A, t: &T) -> bool {
    (1..t.len()).all(|i| !t.outranks(i, arity.parent(i)))
}
