//! Indexed priority queues.
//!
//! Every entry is addressed by a caller-chosen handle in `0..capacity`, so its
//! key can be read, changed or removed without searching the heap. This is
//! what Dijkstra or Prim need to lower a node's distance in place.
//!
//! Heap slots carry `(handle, key)` pairs and `slot_of` maps each handle back
//! to its slot. Every swap keeps both sides in sync.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use nonmax::NonMaxUsize;

use crate::error::HeapError;
use crate::error::KeyDirection;
use crate::error::Result;
use crate::heap_primitives::Arity;
use crate::heap_primitives::Multiway;
use crate::order::Compare;
use crate::order::Max;
use crate::order::Min;
use crate::order::Natural;
use crate::order::Orientation;
use crate::sift;
use crate::sift::SiftTarget;

/// Max-oriented indexed queue.
pub type IndexMaxPQ<K, C = Natural> = IndexedHeap<K, Max, Multiway, C>;
/// Min-oriented indexed queue.
pub type IndexMinPQ<K, C = Natural> = IndexedHeap<K, Min, Multiway, C>;

#[derive(Clone, Debug)]
struct Entry<K> {
    /// Handle owning this slot.
    handle: usize,
    key: K,
}

#[inline(always)]
fn slot_ref(slot: usize) -> NonMaxUsize {
    debug_assert!(slot != usize::MAX);
    // SAFETY: Slots index a `Vec`, whose length never exceeds `isize::MAX`.
    unsafe { NonMaxUsize::new_unchecked(slot) }
}

/// A priority queue whose entries are addressed by a stable integer handle.
///
/// ```
/// use multiway_heap::indexed::IndexMinPQ;
///
/// let mut distances = IndexMinPQ::new(3);
/// distances.insert(0, 7)?;
/// distances.insert(1, 4)?;
/// distances.insert(2, 9)?;
/// distances.decrease_key(2, 1)?;
/// assert_eq!(distances.extract_entry()?, (2, 1));
/// assert_eq!(distances.peek_handle()?, 1);
/// # Ok::<(), multiway_heap::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedHeap<K, O = Max, A = Multiway, C = Natural> {
    heap: Vec<Entry<K>>,
    /// Slot of every present handle.
    ///
    /// ```pseudocode
    /// for (i, e) in self.heap.enumerate():
    ///   assert_eq(self.slot_of[e.handle], Some(i))
    /// ```
    slot_of: Vec<Option<NonMaxUsize>>,
    arity: A,
    cmp: C,
    _orientation: PhantomData<O>,
}

impl<K, O, A> IndexedHeap<K, O, A, Natural>
where
    K: Ord,
    O: Orientation,
    A: Arity,
{
    /// Empty queue for handles `0..capacity` with the default arity.
    pub fn new(capacity: usize) -> Self {
        Self::with_arity(A::default(), capacity)
    }

    pub fn with_arity(arity: A, capacity: usize) -> Self {
        Self::with_comparator(arity, capacity, Natural)
    }
}

impl<K, O, A, C> IndexedHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    pub fn with_comparator(arity: A, capacity: usize, cmp: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slot_of: vec![None; capacity],
            arity,
            cmp,
            _orientation: PhantomData,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    /// Number of valid handles, `0..handle_capacity()`.
    pub fn handle_capacity(&self) -> usize {
        self.slot_of.len()
    }
    pub fn arity(&self) -> A {
        self.arity
    }

    #[inline(always)]
    fn check_range(&self, handle: usize) -> Result<()> {
        if handle >= self.slot_of.len() {
            return Err(HeapError::HandleOutOfRange {
                handle,
                capacity: self.slot_of.len(),
            });
        }
        Ok(())
    }

    /// Slot of a present handle.
    #[inline(always)]
    fn slot(&self, handle: usize) -> Result<usize> {
        self.check_range(handle)?;
        self.slot_of[handle]
            .map(|s| s.get())
            .ok_or(HeapError::NotPresent(handle))
    }

    pub fn contains(&self, handle: usize) -> Result<bool> {
        self.check_range(handle)?;
        Ok(self.slot_of[handle].is_some())
    }

    /// Associates `key` with `handle`.
    pub fn insert(&mut self, handle: usize, key: K) -> Result<()> {
        self.check_range(handle)?;
        if self.slot_of[handle].is_some() {
            return Err(HeapError::DuplicateHandle(handle));
        }
        self.verify_heap();

        let slot = self.heap.len(); // Future slot
        self.heap.push(Entry { handle, key });
        self.slot_of[handle] = Some(slot_ref(slot));
        let arity = self.arity;
        sift::sift_up(&arity, self, slot);

        self.verify_heap();
        Ok(())
    }

    /// Handle at the root.
    pub fn peek_handle(&self) -> Result<usize> {
        self.heap
            .first()
            .map(|e| e.handle)
            .ok_or(HeapError::Underflow)
    }

    /// Key at the root.
    pub fn peek_key(&self) -> Result<&K> {
        self.heap
            .first()
            .map(|e| &e.key)
            .ok_or(HeapError::Underflow)
    }

    /// Removes the root, returning its handle.
    pub fn extract(&mut self) -> Result<usize> {
        self.extract_entry().map(|(handle, _)| handle)
    }

    /// Removes the root, returning its handle and key.
    pub fn extract_entry(&mut self) -> Result<(usize, K)> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("ExtractEntry");

        if self.heap.is_empty() {
            return Err(HeapError::Underflow);
        }
        self.verify_heap();

        let top = self.heap.swap_remove(0);
        self.slot_of[top.handle] = None;
        if !self.heap.is_empty() {
            self.slot_of[self.heap[0].handle] = Some(slot_ref(0));
            let arity = self.arity;
            sift::sift_down(&arity, self, 0);
        }

        self.verify_heap();
        Ok((top.handle, top.key))
    }

    pub fn key_of(&self, handle: usize) -> Result<&K> {
        let slot = self.slot(handle)?;
        Ok(&self.heap[slot].key)
    }

    /// Replaces the key of `handle`, moving it whichever way the new key
    /// requires.
    pub fn change_key(&mut self, handle: usize, key: K) -> Result<()> {
        let slot = self.slot(handle)?;
        self.verify_heap();

        self.heap[slot].key = key;
        let arity = self.arity;
        let slot = sift::sift_up(&arity, self, slot);
        sift::sift_down(&arity, self, slot);

        self.verify_heap();
        Ok(())
    }

    /// Lowers the key of `handle`. The new key must be strictly smaller.
    ///
    /// On a min queue the entry moves towards the root, on a max queue
    /// towards the leaves.
    pub fn decrease_key(&mut self, handle: usize, key: K) -> Result<()> {
        self.update_key(handle, key, KeyDirection::Decrease)
    }

    /// Raises the key of `handle`. The new key must be strictly greater.
    ///
    /// On a max queue the entry moves towards the root, on a min queue
    /// towards the leaves.
    pub fn increase_key(&mut self, handle: usize, key: K) -> Result<()> {
        self.update_key(handle, key, KeyDirection::Increase)
    }

    fn update_key(&mut self, handle: usize, key: K, direction: KeyDirection) -> Result<()> {
        let slot = self.slot(handle)?;
        let current = &self.heap[slot].key;
        let valid = match direction {
            KeyDirection::Decrease => self.cmp.less(&key, current),
            KeyDirection::Increase => self.cmp.less(current, &key),
        };
        if !valid {
            return Err(HeapError::InvalidKeyDirection { handle, direction });
        }
        self.verify_heap();

        let rises = O::outranks(&self.cmp, &key, current);
        self.heap[slot].key = key;
        let arity = self.arity;
        if rises {
            sift::sift_up(&arity, self, slot);
        } else {
            sift::sift_down(&arity, self, slot);
        }

        self.verify_heap();
        Ok(())
    }

    /// Removes `handle` from the queue, returning its key.
    ///
    /// The last entry fills the hole and is sifted both up and down, as it
    /// may belong on either side.
    pub fn delete(&mut self, handle: usize) -> Result<K> {
        let slot = self.slot(handle)?;
        self.verify_heap();

        let removed = self.heap.swap_remove(slot);
        self.slot_of[handle] = None;
        if slot < self.heap.len() {
            self.slot_of[self.heap[slot].handle] = Some(slot_ref(slot));
            let arity = self.arity;
            sift::sift_up(&arity, self, slot);
            sift::sift_down(&arity, self, slot);
        }

        self.verify_heap();
        Ok(removed.key)
    }

    /// Does every slot respect heap order, with handles and slots in sync?
    #[cfg(any(test, feature = "inspect"))]
    pub fn is_heap(&self) -> bool {
        let in_sync = self
            .heap
            .iter()
            .enumerate()
            .all(|(i, e)| self.slot_of[e.handle].map(|s| s.get()) == Some(i));
        let present = self.slot_of.iter().filter(|s| s.is_some()).count();
        in_sync && present == self.heap.len() && sift::is_heap(&self.arity, self)
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every slot,
        for (i, e) in self.heap.iter().enumerate() {
            // - Is where its handle says it is.
            debug_assert_eq!(self.slot_of[e.handle].map(|s| s.get()), Some(i));

            // - Goes after its parent slot, if any.
            if i == 0 {
                continue;
            }
            let p = self.arity.parent(i);
            debug_assert!(
                !self.outranks(i, p),
                "Handle {} at [{i}] outranks handle {} at parent [{p}]. Out of heap of len={}",
                e.handle,
                self.heap[p].handle,
                self.heap.len(),
            );
        }
    }
}

impl<K, O, A, C> IndexedHeap<K, O, A, C>
where
    K: Clone,
    O: Orientation,
    A: Arity,
    C: Compare<K> + Clone,
{
    /// Iterates over handles from the root outwards without touching this
    /// queue.
    ///
    /// Drains a copy of the queue, so a full pass costs O(N log N).
    pub fn iter(&self) -> HandleIter<K, O, A, C> {
        HandleIter { heap: self.clone() }
    }
}

impl<K, O, A, C> SiftTarget for IndexedHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    #[inline(always)]
    fn len(&self) -> usize {
        self.heap.len()
    }
    #[inline(always)]
    fn outranks(&self, i: usize, j: usize) -> bool {
        O::outranks(&self.cmp, &self.heap[i].key, &self.heap[j].key)
    }
    /// Keeps the handle map in sync.
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slot_of[self.heap[i].handle] = Some(slot_ref(i));
        self.slot_of[self.heap[j].handle] = Some(slot_ref(j));
    }
}

/// Key of a present handle.
///
/// Panics when the handle is out of range or absent, see
/// [`IndexedHeap::key_of`] for the fallible version.
impl<K, O, A, C> std::ops::Index<usize> for IndexedHeap<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    type Output = K;

    fn index(&self, handle: usize) -> &Self::Output {
        match self.key_of(handle) {
            Ok(key) => key,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Handles of an indexed queue from the root outwards.
#[derive(Clone, Debug)]
pub struct HandleIter<K, O, A, C> {
    heap: IndexedHeap<K, O, A, C>,
}

impl<K, O, A, C> Iterator for HandleIter<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.heap.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K, O, A, C> ExactSizeIterator for HandleIter<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
}

impl<K, O, A, C> FusedIterator for HandleIter<K, O, A, C>
where
    O: Orientation,
    A: Arity,
    C: Compare<K>,
{
}
