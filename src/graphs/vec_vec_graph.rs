use std::fmt;

use itertools::Itertools;

use super::{
    edge::{TaillessWeightedEdge, WeightedEdge},
    Graph, Vertex,
};
use crate::error::{check_vertex, Result};

/// Adjacency list graph. Every vertex owns the arcs leaving it, in the order
/// they were inserted.
#[derive(Clone, Debug, Default)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessWeightedEdge>>,
}

impl VecVecGraph {
    pub fn new(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds a graph with one arc per edge.
    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<VecVecGraph> {
        let mut graph = VecVecGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Builds a graph with two arcs per edge, one in each direction.
    pub fn from_undirected_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<VecVecGraph> {
        let mut graph = VecVecGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge_bidirectional(edge)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, edge: &WeightedEdge) -> Result<()> {
        check_vertex(edge.tail(), self.number_of_vertices())?;
        check_vertex(edge.head(), self.number_of_vertices())?;

        self.edges[edge.tail() as usize].push(edge.tailless());
        Ok(())
    }

    pub fn add_edge_bidirectional(&mut self, edge: &WeightedEdge) -> Result<()> {
        self.add_edge(edge)?;
        self.add_edge(&edge.reversed())
    }

    /// Removes the first arc from `tail` to `head`. Returns whether an arc
    /// was removed.
    pub fn remove_edge(&mut self, tail: Vertex, head: Vertex) -> Result<bool> {
        check_vertex(tail, self.number_of_vertices())?;
        check_vertex(head, self.number_of_vertices())?;

        let edges_sharing_tail = &mut self.edges[tail as usize];
        match edges_sharing_tail.iter().position(|edge| edge.head() == head) {
            Some(index) => {
                edges_sharing_tail.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes one arc in each direction between `tail` and `head`.
    pub fn remove_edge_bidirectional(&mut self, tail: Vertex, head: Vertex) -> Result<bool> {
        let forward = self.remove_edge(tail, head)?;
        let backward = self.remove_edge(head, tail)?;
        Ok(forward || backward)
    }

    pub fn neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        self.edges(vertex).map(|edge| edge.head()).collect()
    }

    /// One `tail->head` line per arc.
    pub fn arcs(&self) -> Vec<String> {
        self.all_edges()
            .iter()
            .map(|edge| format!("{}->{}", edge.tail(), edge.head()))
            .collect()
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Define a struct for iterating over edges with the same tail. Struct is needed
        // as tail would otherwise not live enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessWeightedEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges_sharing_tail: &[TaillessWeightedEdge] = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[]);

        Box::new(EdgeIterator {
            edge_iter: edges_sharing_tail.iter(),
            tail,
        })
    }
}

/// Prints one line per vertex, the vertex followed by its neighbors:
/// `1->0->2->3`.
impl fmt::Display for VecVecGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            let neighbors = self.neighbors(vertex);
            if neighbors.is_empty() {
                writeln!(f, "{}", vertex)?;
            } else {
                writeln!(f, "{}->{}", vertex, neighbors.iter().join("->"))?;
            }
        }
        Ok(())
    }
}
