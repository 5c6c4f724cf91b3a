//! Priority queues over a d-ary heap.
//!
//! One engine, [`MultiwayHeap`], covers every flavor: the orientation picks
//! the max or min end, the arity picks the branching factor and how indices
//! are computed, and the comparator picks the key order.
//!
//! ```
//! use multiway_heap::heap_primitives::Multiway;
//! use multiway_heap::queue::MultiwayMaxPQ;
//!
//! let mut pq = MultiwayMaxPQ::with_arity(Multiway::new(4)?);
//! for k in [5, 1, 9, 3, 7, 2] {
//!     pq.insert(k);
//! }
//! assert_eq!(pq.peek(), Ok(&9));
//! assert_eq!(pq.extract(), Ok(9));
//! assert_eq!(pq.into_iter().collect::<Vec<_>>(), vec![7, 5, 3, 2, 1]);
//! # Ok::<(), multiway_heap::HeapError>(())
//! ```

use std::fmt::Display;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::error::HeapError;
use crate::error::Result;
use crate::heap_primitives::Arity;
use crate::heap_primitives::Multiway;
use crate::heap_primitives::PowerOf2;
use crate::order::Compare;
use crate::order::Max;
use crate::order::Min;
use crate::order::Natural;
use crate::order::Orientation;
use crate::sift;
use crate::sift::SiftTarget;
use crate::store::HeapStore;

/// Max-oriented queue with a run-time branching factor.
pub type MultiwayMaxPQ<K, C = Natural> = MultiwayHeap<K, Max, Multiway, C>;
/// Min-oriented queue with a run-time branching factor.
pub type MultiwayMinPQ<K, C = Natural> = MultiwayHeap<K, Min, Multiway, C>;
/// Max-oriented queue with a power-of-two branching factor.
pub type PowerOf2MaxPQ<K, C = Natural> = MultiwayHeap<K, Max, PowerOf2, C>;
/// Min-oriented queue with a power-of-two branching factor.
pub type PowerOf2MinPQ<K, C = Natural> = MultiwayHeap<K, Min, PowerOf2, C>;

/// A priority queue backed by a d-ary heap in a flat array.
///
/// Keys are opaque to the caller once inserted: they can only be observed
/// at the root and taken out from there.
#[derive(Clone, Debug)]
pub struct MultiwayHeap<K, O = Max, A = Multiway, C = Natural> {
    store: HeapStore<K>,
    arity: A,
    cmp: C,
    _orientation: PhantomData<O>,
}

impl<K, O, A> MultiwayHeap<K, O, A, Natural>
where
    K: Ord,
    O: Orientation,
    A: Arity,
{
    /// Empty queue with the default arity.
    pub fn new() -> Self {
        Self::with_arity(A::default())
    }

    pub fn with_arity(arity: A) -> Self {
        Self::with_comparator(arity, Natural)
    }

    pub fn with_capacity(arity: A, capacity: usize) -> Self {
        Self::with_capacity_and_comparator(arity, capacity, Natural)
    }

    /// Builds a queue out of `keys` in linear time.
    pub fn from_vec(arity: A, keys: Vec<K>) -> Self {
        Self::from_vec_with_comparator(arity, keys, Natural)
    }
}

impl<K, O, A, C> MultiwayHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    pub fn with_comparator(arity: A, cmp: C) -> Self {
        Self::with_capacity_and_comparator(arity, 1, cmp)
    }

    pub fn with_capacity_and_comparator(arity: A, capacity: usize, cmp: C) -> Self {
        Self {
            store: HeapStore::with_capacity(capacity),
            arity,
            cmp,
            _orientation: PhantomData,
        }
    }

    /// Builds a queue out of `keys` in linear time, sinking every parent
    /// from the last one up to the root.
    pub fn from_vec_with_comparator(arity: A, keys: Vec<K>, cmp: C) -> Self {
        let mut heap = Self {
            store: HeapStore::from_vec(keys),
            arity,
            cmp,
            _orientation: PhantomData,
        };
        log::debug!("Heapifying {} keys into a {:?} heap", heap.len(), arity);
        sift::heapify(&arity, &mut heap);
        heap.verify_heap();
        heap
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.len()
    }
    /// Slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }
    pub fn arity(&self) -> A {
        self.arity
    }

    /// The key at the root.
    pub fn peek(&self) -> Result<&K> {
        if self.store.is_empty() {
            return Err(HeapError::Underflow);
        }
        Ok(self.store.get(0))
    }

    pub fn insert(&mut self, key: K) {
        self.verify_heap();

        let slot = self.store.len();
        self.store.append(key);
        let arity = self.arity;
        sift::sift_up(&arity, self, slot);

        self.verify_heap();
    }

    /// Takes the key at the root out of the queue.
    pub fn extract(&mut self) -> Result<K> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("Extract");

        self.verify_heap();
        if self.store.is_empty() {
            return Err(HeapError::Underflow);
        }

        let top = self.store.swap_remove(0);
        if !self.store.is_empty() {
            let arity = self.arity;
            sift::sift_down(&arity, self, 0);
        }

        self.verify_heap();
        Ok(top)
    }

    /// Does every slot respect heap order?
    #[cfg(any(test, feature = "inspect"))]
    pub fn is_heap(&self) -> bool {
        sift::is_heap(&self.arity, self)
    }

    /// Raw slots in heap order.
    #[cfg(any(test, feature = "inspect"))]
    pub fn as_slice(&self) -> &[K] {
        self.store.as_slice()
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every slot goes after its parent, if any.
        for i in 1..self.len() {
            let p = self.arity.parent(i);
            debug_assert!(
                !self.outranks(i, p),
                "Slot [{i}] outranks its parent [{p}]. Out of {:?} heap of len={}",
                self.arity,
                self.len(),
            );
        }
    }
}

impl<K, O, A, C> MultiwayHeap<K, O, A, C>
where
    K: Clone,
    O: Orientation,
    A: Arity,
    C: Compare<K> + Clone,
{
    /// Iterates over the keys from the root outwards without touching this
    /// queue.
    ///
    /// Every call copies the whole heap and drains the copy, so a full pass
    /// costs O(N) extra memory and O(N log N) time.
    pub fn iter(&self) -> SortedIter<K, O, A, C> {
        SortedIter {
            heap: Self {
                store: HeapStore::from_vec(self.store.as_slice().to_vec()),
                arity: self.arity,
                cmp: self.cmp.clone(),
                _orientation: PhantomData,
            },
        }
    }
}

impl<K, O, A, C> SiftTarget for MultiwayHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.store.len()
    }
    #[inline(always)]
    fn outranks(&self, i: usize, j: usize) -> bool {
        O::outranks(&self.cmp, self.store.get(i), self.store.get(j))
    }
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.store.swap(i, j);
    }
}

impl<K, O, A> Default for MultiwayHeap<K, O, A, Natural>
where
    K: Ord,
    O: Orientation,
    A: Arity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O, A, C> Extend<K> for MultiwayHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, O, A> FromIterator<K> for MultiwayHeap<K, O, A, Natural>
where
    K: Ord,
    O: Orientation,
    A: Arity,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_vec(A::default(), iter.into_iter().collect())
    }
}

/// Prints one tree level per line, with `;` between sibling groups.
///
/// ```text
/// [ 0: 0]
/// [ 1: 1,  2: 2]
/// [ 3: 3,  4: 4;  5: 5,  6: 6]
/// ```
impl<K, O, A, C> Display for MultiwayHeap<K, O, A, C>
where
    K: Display,
    A: Arity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.store.len();
        let width = self.arity.width();
        // First slot of the next level.
        let mut next_level = self.arity.first_child(0);

        write!(f, "[")?;
        for i in 0..len {
            write!(f, "{i:>2}:{:>2}", self.store.get(i))?;
            if i + 1 == len {
                break;
            }
            if i + 1 == next_level {
                write!(f, "]\n[")?;
                next_level = self.arity.first_child(next_level);
            } else if i % width == 0 {
                write!(f, "; ")?;
            } else {
                write!(f, ", ")?;
            }
        }
        writeln!(f, "]")
    }
}

/// Keys of a queue from the root outwards.
///
/// Either drains a private copy ([`MultiwayHeap::iter`]) or the queue
/// itself ([`IntoIterator`]).
#[derive(Clone, Debug)]
pub struct SortedIter<K, O, A, C> {
    heap: MultiwayHeap<K, O, A, C>,
}

impl<K, O, A, C> Iterator for SortedIter<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.heap.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K, O, A, C> ExactSizeIterator for SortedIter<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
}

impl<K, O, A, C> FusedIterator for SortedIter<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
}

impl<K, O, A, C> IntoIterator for MultiwayHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    type Item = K;
    type IntoIter = SortedIter<K, O, A, C>;

    fn into_iter(self) -> Self::IntoIter {
        SortedIter { heap: self }
    }
}

impl<'a, K, O, A, C> IntoIterator for &'a MultiwayHeap<K, O, A, C>
where
    K: Clone,
    O: Orientation,
    A: Arity,
    C: Compare<K> + Clone,
{
    type Item = K;
    type IntoIter = SortedIter<K, O, A, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
