// Heap index arithmetic for d-ary heaps.
//
// A heap is a tree-like structure where every subtree's root ranks above all
// the other nodes in the subtree.
//
// This is implemented with an array that's traversed in a non-linear way.
// These are the indices we assign to each node of a 3-ary heap,
//
// ```text
//                                  0
//          1                       2                       3
//   4      5      6         7      8      9         10     11     12
// 13 14 15 ...
// ```
//
// The last level will often be incomplete
//
// You can go up and down from any index with,
//   - Up:         `(i-1)//D`
//   - Down-first: `(D*i) + 1`
//   - Down-last:  `D*(i+1)`
//
// When D=2^p the divisions and products become shifts.

use std::cmp::min;
use std::fmt::Debug;
use std::num::NonZeroUsize;
use std::ops::Range;

use derive_more::Display;

use crate::error::HeapError;
use crate::error::Result;

/// The parent node
///
/// ```
/// use multiway_heap::heap_primitives::index_parent;
/// assert_eq!(index_parent::<2>(1), 0);
/// assert_eq!(index_parent::<2>(2), 0);
/// assert_eq!(index_parent::<2>(3), 1);
/// assert_eq!(index_parent::<2>(25), 12);
/// assert_eq!(index_parent::<3>(3), 0);
/// assert_eq!(index_parent::<3>(4), 1);
/// assert_eq!(index_parent::<1>(7), 6);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const A: usize>(i: usize) -> usize {
    debug_assert!(i != 0, "The root has no parent");
    (i - 1) / A
}

/// The first children
///
/// ```
/// use multiway_heap::heap_primitives::index_first_children;
/// assert_eq!(index_first_children::<2usize>(0), 1);
/// assert_eq!(index_first_children::<2usize>(1), 3);
/// assert_eq!(index_first_children::<2usize>(11), 23);
/// assert_eq!(index_first_children::<3usize>(1), 4);
/// assert_eq!(index_first_children::<3usize>(usize::MAX), usize::MAX);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_children<const A: usize>(i: usize) -> usize {
    A.saturating_mul(i).saturating_add(1)
}

/// The last children
///
/// ```
/// use multiway_heap::heap_primitives::index_last_children;
/// assert_eq!(index_last_children::<2usize>(0), 2);
/// assert_eq!(index_last_children::<2usize>(6), 14);
/// assert_eq!(index_last_children::<3usize>(1), 6);
/// assert_eq!(index_last_children::<1usize>(4), 5);
/// ```
#[inline(always)]
#[must_use]
pub fn index_last_children<const A: usize>(i: usize) -> usize {
    A.saturating_mul(i.saturating_add(1))
}

/// Branching factor of a heap and the index arithmetic it implies.
///
/// Index arithmetic saturates at `usize::MAX`, which is never a valid slot,
/// so huge factors simply run out of children instead of wrapping around.
pub trait Arity: Copy + Debug + Default {
    /// Number of children of every internal node.
    fn width(&self) -> usize;

    /// Slot of the parent of `i`. `i` must not be the root.
    fn parent(&self, i: usize) -> usize;

    /// Slot of the first child of `j`.
    fn first_child(&self, j: usize) -> usize;

    /// Slot of the last child of `j`, ignoring the heap length.
    #[inline(always)]
    fn last_child(&self, j: usize) -> usize {
        self.first_child(j).saturating_add(self.width() - 1)
    }

    /// Children of `j` that are inside a heap of `len` slots.
    #[inline(always)]
    fn child_range(&self, j: usize, len: usize) -> Range<usize> {
        let first = self.first_child(j);
        if first >= len {
            return len..len;
        }
        first..min(self.last_child(j), len - 1) + 1
    }
}

/// General multiway arity, `D` chosen at run time.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
#[display("{d}-ary")]
pub struct Multiway {
    d: NonZeroUsize,
}

impl Multiway {
    /// Width used when none is given. Picked empirically, any width is correct.
    pub const DEFAULT_WIDTH: usize = 6;

    pub fn new(d: usize) -> Result<Self> {
        NonZeroUsize::new(d)
            .map(|d| Self { d })
            .ok_or(HeapError::InvalidArity(d))
    }

    /// A width that fits a whole sibling group of `T` in a 128B line pair.
    pub fn cacheline<T: Sized>() -> Self {
        let s = std::cmp::max(std::mem::size_of::<T>(), 1);
        let d = std::cmp::max(128 / s, 2usize);
        Self {
            d: NonZeroUsize::new(d).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Default for Multiway {
    fn default() -> Self {
        Self {
            d: NonZeroUsize::new(Self::DEFAULT_WIDTH).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Arity for Multiway {
    #[inline(always)]
    fn width(&self) -> usize {
        self.d.get()
    }
    #[inline(always)]
    fn parent(&self, i: usize) -> usize {
        debug_assert!(i != 0, "The root has no parent");
        (i - 1) / self.d
    }
    #[inline(always)]
    fn first_child(&self, j: usize) -> usize {
        j.saturating_mul(self.d.get()).saturating_add(1)
    }
}

/// Power-of-two arity `2^p`, using shifts instead of divisions.
///
/// `p = 0` is a valid unary heap, a chain that behaves like insertion sort.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
#[display("2^{p}-ary")]
pub struct PowerOf2 {
    p: u32,
}

impl PowerOf2 {
    /// Exponent used when none is given, an 8-ary heap.
    pub const DEFAULT_EXPONENT: u32 = 3;

    pub fn new(p: u32) -> Result<Self> {
        if p >= usize::BITS {
            return Err(HeapError::InvalidExponent(p));
        }
        Ok(Self { p })
    }

    pub fn exponent(&self) -> u32 {
        self.p
    }
}

impl Default for PowerOf2 {
    fn default() -> Self {
        Self {
            p: Self::DEFAULT_EXPONENT,
        }
    }
}

impl Arity for PowerOf2 {
    #[inline(always)]
    fn width(&self) -> usize {
        1usize << self.p
    }
    #[inline(always)]
    fn parent(&self, i: usize) -> usize {
        debug_assert!(i != 0, "The root has no parent");
        (i - 1) >> self.p
    }
    #[inline(always)]
    fn first_child(&self, j: usize) -> usize {
        if j.leading_zeros() < self.p {
            return usize::MAX;
        }
        (j << self.p).saturating_add(1)
    }
}

/// Arity fixed at compile time.
///
/// A zero arity does not build:
///
/// ```compile_fail
/// use multiway_heap::heap_primitives::Fixed;
/// use multiway_heap::queue::MultiwayHeap;
/// use multiway_heap::order::Max;
///
/// let mut pq = MultiwayHeap::<u8, Max, Fixed<0>>::new();
/// pq.insert(1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fixed<const D: usize>;

impl<const D: usize> Fixed<D> {
    const NON_ZERO: () = assert!(D > 0, "Heap arity must be at least 1");

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self
    }
}

impl<const D: usize> Default for Fixed<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> std::fmt::Display for Fixed<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{D}-ary")
    }
}

impl<const D: usize> Arity for Fixed<D> {
    #[inline(always)]
    fn width(&self) -> usize {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        D
    }
    #[inline(always)]
    fn parent(&self, i: usize) -> usize {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        index_parent::<D>(i)
    }
    #[inline(always)]
    fn first_child(&self, j: usize) -> usize {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        index_first_children::<D>(j)
    }
    #[inline(always)]
    fn last_child(&self, j: usize) -> usize {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        index_last_children::<D>(j)
    }
}
