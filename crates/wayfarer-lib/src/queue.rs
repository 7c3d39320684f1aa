//! Binary min-heap keyed by a floating point priority.
//!
//! Unlike [`std::collections::BinaryHeap`], this queue supports lowering the
//! priority of an element already in the heap, which is what the solver uses
//! to relax edges without leaving stale entries behind.
//!
//! Locating an element for [`MinHeap::decrease_priority`] is a linear scan
//! over the backing array. Route graphs hold tens to low hundreds of
//! settlements, so the scan is cheaper than maintaining a slot index; a
//! position map keyed by element would be needed for much larger graphs.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct HeapEntry<T> {
    item: T,
    priority: f64,
}

/// Array-backed binary min-heap.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<HeapEntry<T>>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: PartialEq> MinHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest priority currently queued, without removing it.
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.entries
            .first()
            .map(|entry| (&entry.item, entry.priority))
    }

    /// Insert an element in O(log n).
    pub fn enqueue(&mut self, item: T, priority: f64) {
        self.entries.push(HeapEntry { item, priority });
        self.bubble_up(self.entries.len() - 1);
    }

    /// Remove and return the element with the lowest priority.
    ///
    /// # Errors
    /// Returns [`Error::EmptyQueue`] when nothing is queued.
    pub fn dequeue_min(&mut self) -> Result<(T, f64)> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().ok_or(Error::EmptyQueue)?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.item, entry.priority))
    }

    /// Lower the priority of `item` if `new_priority` is strictly smaller
    /// than its current one. Items not yet queued are inserted.
    ///
    /// Returns `true` when the heap changed.
    pub fn decrease_priority(&mut self, item: T, new_priority: f64) -> bool {
        match self.entries.iter().position(|entry| entry.item == item) {
            Some(index) => {
                if new_priority < self.entries[index].priority {
                    self.entries[index].priority = new_priority;
                    self.bubble_up(index);
                    true
                } else {
                    false
                }
            }
            None => {
                self.enqueue(item, new_priority);
                true
            }
        }
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority < self.entries[parent].priority {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}
