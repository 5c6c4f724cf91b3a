//! Array storage for heap slots.
//!
//! `Vec` already amortizes growth, but it never gives memory back on its own
//! and its growth factor is unspecified. The store keeps its own logical
//! capacity so that it doubles when full and halves once it is at most a
//! quarter full.

use std::cmp::max;

/// Dynamic array of heap slots with a doubling/halving capacity policy.
#[derive(Clone, Debug)]
pub struct HeapStore<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> HeapStore<T> {
    /// An empty store with room for at least one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = max(capacity, 1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adopts `slots` verbatim, keeping their order.
    pub fn from_vec(mut slots: Vec<T>) -> Self {
        let capacity = max(slots.len(), 1);
        slots.shrink_to(capacity);
        Self { slots, capacity }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn get(&self, slot: usize) -> &T {
        &self.slots[slot]
    }
    #[inline(always)]
    pub fn set(&mut self, slot: usize, value: T) {
        self.slots[slot] = value;
    }
    #[inline(always)]
    pub fn swap(&mut self, l: usize, r: usize) {
        self.slots.swap(l, r);
    }
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Appends a value, doubling the capacity when full.
    pub fn append(&mut self, value: T) {
        if self.slots.len() == self.capacity {
            self.resize(self.capacity.saturating_mul(2));
        }
        self.slots.push(value);
    }

    /// Removes the value in the last slot.
    pub fn remove_last(&mut self) -> Option<T> {
        let value = self.slots.pop();
        self.maybe_shrink();
        value
    }

    /// Removes the value at `slot`, moving the last value into its place.
    pub fn swap_remove(&mut self, slot: usize) -> T {
        let value = self.slots.swap_remove(slot);
        self.maybe_shrink();
        value
    }

    fn maybe_shrink(&mut self) {
        let len = self.slots.len();
        if len > 0 && len <= self.capacity / 4 {
            self.resize(self.capacity / 2);
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.slots.len());
        log::trace!(
            "Resizing heap store of {} slots: {} -> {}",
            self.slots.len(),
            self.capacity,
            capacity
        );
        if capacity > self.capacity {
            self.slots.reserve_exact(capacity - self.slots.len());
        } else {
            self.slots.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}

impl<T> Default for HeapStore<T> {
    fn default() -> Self {
        Self::with_capacity(1)
    }
}
