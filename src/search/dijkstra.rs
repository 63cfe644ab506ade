use log::debug;

use super::{DistanceTable, SearchState};
use crate::{
    error::{check_vertex, Result},
    graphs::{Distance, Graph, Vertex},
    queue::{heap_queue::HeapQueue, DijkstraQueue, DijkstraQueueElement},
};

/// Single source shortest path distances over non-negative weights.
///
/// Negative weights are not detected. Every vertex is expanded at most once
/// and an arc is only relaxed if it does not lead below the distance of the
/// expanded vertex, so arcs with negative weight are ignored and the returned
/// distances are then not guaranteed to be minimal.
pub fn dijkstra(graph: &dyn Graph, source: Vertex) -> Result<DistanceTable> {
    dijkstra_with_queue(graph, source, &mut HeapQueue::new())
}

/// Same as [`dijkstra`] but with a caller supplied frontier. The queue is
/// cleared before the search starts.
pub fn dijkstra_with_queue(
    graph: &dyn Graph,
    source: Vertex,
    queue: &mut dyn DijkstraQueue,
) -> Result<DistanceTable> {
    check_vertex(source, graph.number_of_vertices())?;

    let mut data = DistanceTable::new(graph.number_of_vertices(), source);
    queue.clear();
    queue.push(DijkstraQueueElement::new(0, source));
    debug!("dijkstra from {}: {}", source, SearchState::Initialized);

    debug!("dijkstra from {}: {}", source, SearchState::Relaxing);
    let mut expanded = vec![false; graph.number_of_vertices() as usize];
    let mut number_of_expanded = 0;
    while let Some(DijkstraQueueElement { distance, vertex }) = queue.pop() {
        // stale entry or the vertex was already expanded
        if data.get(vertex) != Some(distance) || expanded[vertex as usize] {
            continue;
        }
        expanded[vertex as usize] = true;
        number_of_expanded += 1;

        for edge in graph.edges(vertex) {
            if expanded[edge.head() as usize] {
                continue;
            }

            // keeps the frontier monotone
            let alternative_distance = distance + Distance::from(edge.weight());
            if alternative_distance < distance {
                continue;
            }

            if data.relax(edge.head(), alternative_distance) {
                queue.push(DijkstraQueueElement::new(alternative_distance, edge.head()));
            }
        }
    }

    debug!(
        "dijkstra from {}: {} after expanding {} vertices",
        source,
        SearchState::Converged,
        number_of_expanded
    );
    Ok(data)
}
