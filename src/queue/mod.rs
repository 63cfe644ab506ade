use std::cmp::Ordering;

use crate::graphs::{Distance, Vertex};

pub mod heap_queue;
pub mod radix_queue;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub distance: Distance,
    pub vertex: Vertex,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on distances.
        // In case of a tie we compare vertices - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraQueueElement {
    pub fn new(distance: Distance, vertex: Vertex) -> DijkstraQueueElement {
        DijkstraQueueElement { distance, vertex }
    }
}

/// Frontier of a priority queue search. Entries are never updated in place,
/// a vertex may be contained several times with different distances.
pub trait DijkstraQueue {
    fn push(&mut self, element: DijkstraQueueElement);

    /// Removes and returns the element with the smallest distance.
    fn pop(&mut self) -> Option<DijkstraQueueElement>;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::{
        heap_queue::HeapQueue, radix_queue::RadixQueue, DijkstraQueue, DijkstraQueueElement,
    };

    fn drain(queue: &mut dyn DijkstraQueue) -> Vec<(i64, u32)> {
        let mut popped = Vec::new();
        while let Some(element) = queue.pop() {
            popped.push((element.distance, element.vertex));
        }
        popped
    }

    #[test]
    fn queues_pop_smallest_distance_first() {
        let queues: Vec<Box<dyn DijkstraQueue>> =
            vec![Box::new(HeapQueue::new()), Box::new(RadixQueue::new())];

        for mut queue in queues {
            queue.push(DijkstraQueueElement::new(0, 0));
            assert_eq!(queue.pop(), Some(DijkstraQueueElement::new(0, 0)));

            queue.push(DijkstraQueueElement::new(7, 1));
            queue.push(DijkstraQueueElement::new(3, 2));
            queue.push(DijkstraQueueElement::new(5, 3));
            assert!(!queue.is_empty());

            let distances: Vec<_> = drain(queue.as_mut()).iter().map(|(d, _)| *d).collect();
            assert_eq!(distances, vec![3, 5, 7]);
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = HeapQueue::new();
        queue.push(DijkstraQueueElement::new(1, 1));
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
