use thiserror::Error;

use crate::graphs::Vertex;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A cycle with negative total weight is reachable from the source, so
    /// shortest distances are unbounded below.
    #[error("Negative weight cycle detected")]
    NegativeCycleDetected,

    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    #[error("unable to parse input at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Returns an error if `vertex` is not a valid index into a graph with
/// `number_of_vertices` vertices.
pub fn check_vertex(vertex: Vertex, number_of_vertices: u32) -> Result<()> {
    if vertex >= number_of_vertices {
        return Err(Error::VertexOutOfRange {
            vertex,
            number_of_vertices,
        });
    }

    Ok(())
}
