use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// Distance from the source for every vertex, `None` for vertices that are
/// not reachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    distances: Vec<Option<Distance>>,
}

impl DistanceTable {
    /// Table of `number_of_vertices` unreachable vertices except for
    /// `source`, which has distance 0.
    pub(crate) fn new(number_of_vertices: u32, source: Vertex) -> DistanceTable {
        let mut distances = vec![None; number_of_vertices as usize];
        distances[source as usize] = Some(0);
        DistanceTable { distances }
    }

    pub fn get(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(vertex as usize).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.get(vertex).is_some()
    }

    /// Lowers the distance of `vertex` to `candidate` if that is an
    /// improvement. Returns whether the table changed.
    pub(crate) fn relax(&mut self, vertex: Vertex, candidate: Distance) -> bool {
        if !self.improves(vertex, candidate) {
            return false;
        }

        self.distances[vertex as usize] = Some(candidate);
        true
    }

    /// True if `candidate` would lower the distance of `vertex`.
    pub(crate) fn improves(&self, vertex: Vertex, candidate: Distance) -> bool {
        match self.distances[vertex as usize] {
            Some(distance) => candidate < distance,
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distances(&self) -> &[Option<Distance>] {
        &self.distances
    }

    pub fn into_distances(self) -> Vec<Option<Distance>> {
        self.distances
    }
}

/// One `Vertex <i> -> Distance: <d>` line per vertex, `INF` if unreachable.
impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, distance) in self.distances.iter().enumerate() {
            match distance {
                Some(distance) => writeln!(f, "Vertex {} -> Distance: {}", vertex, distance)?,
                None => writeln!(f, "Vertex {} -> Distance: INF", vertex)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceTable;

    #[test]
    fn only_source_is_reachable_initially() {
        let table = DistanceTable::new(3, 1);

        assert_eq!(table.distances(), &[None, Some(0), None]);
        assert!(table.is_reachable(1));
        assert!(!table.is_reachable(0));
        assert_eq!(table.get(7), None);
    }

    #[test]
    fn relax_never_increases_a_distance() {
        let mut table = DistanceTable::new(2, 0);

        assert!(table.relax(1, 10));
        assert!(!table.relax(1, 12));
        assert!(!table.relax(1, 10));
        assert!(table.relax(1, -4));
        assert_eq!(table.get(1), Some(-4));
    }

    #[test]
    fn display_marks_unreachable_vertices() {
        let mut table = DistanceTable::new(3, 0);
        table.relax(2, 6);

        assert_eq!(
            table.to_string(),
            "Vertex 0 -> Distance: 0\nVertex 1 -> Distance: INF\nVertex 2 -> Distance: 6\n"
        );
    }
}
