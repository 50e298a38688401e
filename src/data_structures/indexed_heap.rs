use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Error, Result};

/// An indexed n-ary min-heap over node indices.
///
/// The heap orders queued indices by an externally-owned cost mapping that
/// the caller passes to every operation and may mutate between calls. A
/// secondary position map is kept in lock-step with every swap, so the
/// priority of an already-queued index can be changed in O(log n) after its
/// cost mapping entry has been updated.
///
/// The caller must populate the cost mapping before inserting or
/// re-prioritizing an index; a missing cost is a contract violation and
/// panics. Popping an empty heap is an ordinary recoverable error. Ties in
/// cost are broken arbitrarily.
#[derive(Debug)]
pub struct IndexedMinHeap {
    /// Children per slot
    way: usize,
    /// Backing storage of queued node indices
    data: Vec<usize>,
    /// Node index -> current slot in `data`
    positions: HashMap<usize, usize>,
}

impl IndexedMinHeap {
    /// Creates a binary indexed min-heap
    pub fn new() -> Self {
        Self::with_way_and_capacity(2, 1)
    }

    /// Creates an indexed min-heap with the given fan-out
    pub fn with_way(way: usize) -> Self {
        Self::with_way_and_capacity(way, 1)
    }

    /// Creates an indexed min-heap with the given fan-out and initial capacity
    pub fn with_way_and_capacity(way: usize, capacity: usize) -> Self {
        assert!(way >= 2, "heap fan-out must be at least 2");
        IndexedMinHeap {
            way,
            data: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of queued indices
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts a node index.
    ///
    /// Panics if `costs` has no entry for it.
    pub fn insert<W>(&mut self, x: usize, costs: &HashMap<usize, W>)
    where
        W: Float + Zero + Debug + Copy,
    {
        if !costs.contains_key(&x) {
            panic!("no cost for node index {} at insert", x);
        }

        self.data.push(x);
        self.positions.insert(x, self.data.len() - 1);
        self.sift_up(self.data.len() - 1, costs);
    }

    /// Re-settles an index whose cost mapping entry changed since it was
    /// queued. The cheaper sift-up runs first; sift-down runs only when
    /// sift-up performed no swap, since the priority may have moved either
    /// way.
    ///
    /// Panics if the index is not currently queued.
    pub fn change_priority<W>(&mut self, x: usize, costs: &HashMap<usize, W>)
    where
        W: Float + Zero + Debug + Copy,
    {
        let slot = match self.positions.get(&x) {
            Some(&slot) => slot,
            None => panic!("node index {} is not queued", x),
        };
        debug_assert!(slot < self.data.len());

        if !self.sift_up(slot, costs) {
            self.sift_down(slot, costs);
        }
    }

    /// Removes and returns the index with the smallest cost, or
    /// [`Error::EmptyHeap`] when nothing remains. Callers should check
    /// [`is_empty`](Self::is_empty) before relying on the value.
    pub fn pop_min<W>(&mut self, costs: &HashMap<usize, W>) -> Result<usize>
    where
        W: Float + Zero + Debug + Copy,
    {
        if self.data.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let min = self.data.swap_remove(0);
        self.positions.remove(&min);
        if let Some(&moved) = self.data.first() {
            self.positions.insert(moved, 0);
            self.sift_down(0, costs);
        }
        Ok(min)
    }

    fn cost_of<W>(&self, x: usize, costs: &HashMap<usize, W>) -> W
    where
        W: Float + Zero + Debug + Copy,
    {
        match costs.get(&x) {
            Some(&cost) => cost,
            None => panic!("no cost for queued node index {}", x),
        }
    }

    fn is_greater<W>(&self, a: usize, b: usize, costs: &HashMap<usize, W>) -> bool
    where
        W: Float + Zero + Debug + Copy,
    {
        self.cost_of(a, costs) > self.cost_of(b, costs)
    }

    /// Swaps two slots, keeping the position map in lock-step
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.positions.insert(self.data[i], j);
        self.positions.insert(self.data[j], i);
        self.data.swap(i, j);
    }

    /// Returns true when at least one swap was performed
    fn sift_up<W>(&mut self, begin: usize, costs: &HashMap<usize, W>) -> bool
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut slot = begin;
        let mut swapped = false;

        while slot > 0 {
            let parent = (slot - 1) / self.way;
            if !self.is_greater(self.data[parent], self.data[slot], costs) {
                break;
            }
            self.swap_slots(parent, slot);
            slot = parent;
            swapped = true;
        }

        swapped
    }

    fn sift_down<W>(&mut self, begin: usize, costs: &HashMap<usize, W>)
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut slot = begin;
        loop {
            let smallest = self.smallest_child_or_self(slot, costs);
            if smallest == slot {
                return;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn smallest_child_or_self<W>(&self, slot: usize, costs: &HashMap<usize, W>) -> usize
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut smallest = slot;
        let first_child = slot * self.way + 1;

        for child in first_child..first_child + self.way {
            if child >= self.data.len() {
                break;
            }
            if self.is_greater(self.data[smallest], self.data[child], costs) {
                smallest = child;
            }
        }

        smallest
    }
}

impl Default for IndexedMinHeap {
    fn default() -> Self {
        Self::new()
    }
}
