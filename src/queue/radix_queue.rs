use radix_heap::RadixHeapMap;

use super::{DijkstraQueue, DijkstraQueueElement};

/// Monotone queue backed by a radix heap.
///
/// A pushed distance must not be smaller than the last popped one. The
/// priority queue search never relaxes an arc below the distance it just
/// popped, so it keeps this for any weights. Pushing a smaller distance
/// directly panics.
#[derive(Clone)]
pub struct RadixQueue {
    // radix heaps are max-heaps, distances are stored negated
    heap: RadixHeapMap<i64, u32>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl DijkstraQueue for RadixQueue {
    fn push(&mut self, element: DijkstraQueueElement) {
        self.heap.push(-element.distance, element.vertex);
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        let (negative_distance, vertex) = self.heap.pop()?;
        Some(DijkstraQueueElement::new(-negative_distance, vertex))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
