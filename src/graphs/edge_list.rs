use super::{edge::WeightedEdge, Graph};
use crate::error::{check_vertex, Result};

/// Flat list of directed arcs, the representation the edge relaxation
/// search iterates over.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    number_of_vertices: u32,
    edges: Vec<WeightedEdge>,
}

impl EdgeList {
    pub fn new(number_of_vertices: u32) -> EdgeList {
        EdgeList {
            number_of_vertices,
            edges: Vec::new(),
        }
    }

    pub fn from_directed(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<EdgeList> {
        let mut edge_list = EdgeList::new(number_of_vertices);
        for edge in edges {
            edge_list.push(*edge)?;
        }
        Ok(edge_list)
    }

    /// Expands every edge into two arcs, `tail -> head` followed by
    /// `head -> tail`.
    pub fn from_undirected(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<EdgeList> {
        let mut edge_list = EdgeList::new(number_of_vertices);
        for edge in edges {
            edge_list.push(*edge)?;
            edge_list.push(edge.reversed())?;
        }
        Ok(edge_list)
    }

    pub fn from_graph(graph: &dyn Graph) -> EdgeList {
        EdgeList {
            number_of_vertices: graph.number_of_vertices(),
            edges: graph.all_edges(),
        }
    }

    pub fn push(&mut self, edge: WeightedEdge) -> Result<()> {
        check_vertex(edge.tail(), self.number_of_vertices)?;
        check_vertex(edge.head(), self.number_of_vertices)?;
        self.edges.push(edge);
        Ok(())
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }
}
