//! Key ordering and heap orientation.
//!
//! A [`Compare`] decides which of two keys is smaller, an [`Orientation`]
//! decides whether smaller keys float to the root ([`Min`]) or sink to the
//! leaves ([`Max`]).

use std::cmp::Ordering;
use std::fmt::Debug;

/// A strict total order over keys.
pub trait Compare<K: ?Sized> {
    /// Is `a` strictly less than `b`?
    fn less(&self, a: &K, b: &K) -> bool;
}

/// The key's own [`Ord`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// A caller supplied comparison function.
///
/// ```
/// use multiway_heap::order::{ByFn, Compare};
///
/// let by_len = ByFn::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert!(by_len.less(&"ox", &"cow"));
/// assert!(!by_len.less(&"cow", &"pig"));
/// ```
#[derive(Copy, Clone)]
pub struct ByFn<F> {
    f: F,
}

impl<F> ByFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Debug for ByFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ByFn")
    }
}

impl<K: ?Sized, F> Compare<K> for ByFn<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.f)(a, b) == Ordering::Less
    }
}

/// Which end of the order lives at the root.
pub trait Orientation: Copy + Debug + Default {
    /// Must `a` sit above `b` in the heap?
    fn outranks<K: ?Sized, C: Compare<K>>(cmp: &C, a: &K, b: &K) -> bool;
}

/// Largest key at the root.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Max;

/// Smallest key at the root.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Min;

impl Orientation for Max {
    #[inline(always)]
    fn outranks<K: ?Sized, C: Compare<K>>(cmp: &C, a: &K, b: &K) -> bool {
        cmp.less(b, a)
    }
}

impl Orientation for Min {
    #[inline(always)]
    fn outranks<K: ?Sized, C: Compare<K>>(cmp: &C, a: &K, b: &K) -> bool {
        cmp.less(a, b)
    }
}
