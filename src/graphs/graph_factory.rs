use std::{io::BufRead, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, vec_vec_graph::VecVecGraph, Vertex, Weight};
use crate::error::{check_vertex, Error, Result};

/// A single source shortest path problem as read from text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortestPathInput {
    pub number_of_vertices: u32,
    pub edges: Vec<WeightedEdge>,
    pub source: Vertex,
}

/// An undirected unweighted graph followed by edges to remove from it.
#[derive(Clone, Debug)]
pub struct EdgeRemovalInput {
    pub graph: VecVecGraph,
    pub removals: Vec<(Vertex, Vertex)>,
}

/// Whitespace separated tokens that remember the line they came from.
struct Tokens {
    tokens: std::vec::IntoIter<(usize, String)>,
    last_line: usize,
}

impl Tokens {
    fn read(reader: impl BufRead) -> Result<Tokens> {
        let mut tokens = Vec::new();
        let mut last_line = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            last_line = index + 1;
            tokens.extend(
                line.split_whitespace()
                    .map(|token| (last_line, token.to_string())),
            );
        }

        Ok(Tokens {
            tokens: tokens.into_iter(),
            last_line,
        })
    }

    fn is_empty(&self) -> bool {
        self.tokens.len() == 0
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let (line, token) = self.tokens.next().ok_or_else(|| Error::Parse {
            line: self.last_line,
            message: format!("expected {} but input ended", what),
        })?;

        token.parse().map_err(|_| Error::Parse {
            line,
            message: format!("unable to parse {} from '{}'", what, token),
        })
    }
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads `V E`, then `E` triples `tail head weight`, then the source.
    pub fn from_reader(reader: impl BufRead) -> Result<ShortestPathInput> {
        let mut tokens = Tokens::read(reader)?;

        let number_of_vertices: u32 = tokens.next("number of vertices")?;
        let number_of_edges: usize = tokens.next("number of edges")?;

        let mut edges = Vec::new();
        for _ in 0..number_of_edges {
            let tail: Vertex = tokens.next("tail")?;
            let head: Vertex = tokens.next("head")?;
            let weight: Weight = tokens.next("weight")?;
            check_vertex(tail, number_of_vertices)?;
            check_vertex(head, number_of_vertices)?;
            edges.push(WeightedEdge::new(tail, head, weight));
        }

        let source: Vertex = tokens.next("source")?;
        check_vertex(source, number_of_vertices)?;

        debug!(
            "read {} vertices, {} edges, source {}",
            number_of_vertices,
            edges.len(),
            source
        );

        Ok(ShortestPathInput {
            number_of_vertices,
            edges,
            source,
        })
    }

    /// Reads `V E`, then `E` pairs `u v` inserted as undirected edges, then
    /// `K` and `K` pairs `u v` to remove. A missing removal section means no
    /// removals.
    pub fn edge_removals_from_reader(reader: impl BufRead) -> Result<EdgeRemovalInput> {
        let mut tokens = Tokens::read(reader)?;

        let number_of_vertices: u32 = tokens.next("number of vertices")?;
        let number_of_edges: usize = tokens.next("number of edges")?;

        let mut graph = VecVecGraph::new(number_of_vertices);
        for _ in 0..number_of_edges {
            let tail: Vertex = tokens.next("tail")?;
            let head: Vertex = tokens.next("head")?;
            graph.add_edge_bidirectional(&WeightedEdge::new(tail, head, 1))?;
        }

        let mut removals = Vec::new();
        if !tokens.is_empty() {
            let number_of_removals: usize = tokens.next("number of removals")?;
            for _ in 0..number_of_removals {
                let tail: Vertex = tokens.next("tail")?;
                let head: Vertex = tokens.next("head")?;
                removals.push((tail, head));
            }
        }

        Ok(EdgeRemovalInput { graph, removals })
    }
}

#[cfg(test)]
mod tests {
    use super::GraphFactory;
    use crate::{error::Error, graphs::edge::WeightedEdge};

    #[test]
    fn reads_triples_across_lines() {
        let input = "4 4\n0 1 4\n0 2 1\n1 2 2\n2 3 5\n0\n";
        let problem = GraphFactory::from_reader(input.as_bytes()).unwrap();

        assert_eq!(problem.number_of_vertices, 4);
        assert_eq!(problem.source, 0);
        assert_eq!(problem.edges.len(), 4);
        assert_eq!(problem.edges[3], WeightedEdge::new(2, 3, 5));
    }

    #[test]
    fn reads_negative_weights() {
        let input = "3 3 0 1 1 1 2 -2 2 0 -2 0";
        let problem = GraphFactory::from_reader(input.as_bytes()).unwrap();

        assert_eq!(problem.edges[1].weight(), -2);
    }

    #[test]
    fn missing_source_is_a_parse_error() {
        let input = "2 1\n0 1 3\n";
        let result = GraphFactory::from_reader(input.as_bytes());

        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn garbage_weight_reports_its_line() {
        let input = "2 1\n0 1 x\n0\n";
        let result = GraphFactory::from_reader(input.as_bytes());

        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let input = "2 0\n2\n";
        let result = GraphFactory::from_reader(input.as_bytes());

        assert!(matches!(result, Err(Error::VertexOutOfRange { vertex: 2, .. })));
    }

    #[test]
    fn reads_edge_removals() {
        let input = "3 2\n0 1\n1 2\n1\n1 0\n";
        let removal_input = GraphFactory::edge_removals_from_reader(input.as_bytes()).unwrap();

        assert_eq!(removal_input.removals, vec![(1, 0)]);
        assert_eq!(removal_input.graph.to_string(), "0->1\n1->0->2\n2->1\n");
    }

    #[test]
    fn removal_section_is_optional() {
        let input = "2 1\n0 1\n";
        let removal_input = GraphFactory::edge_removals_from_reader(input.as_bytes()).unwrap();

        assert!(removal_input.removals.is_empty());
        assert_eq!(removal_input.graph.to_string(), "0->1\n1->0\n");
    }
}
