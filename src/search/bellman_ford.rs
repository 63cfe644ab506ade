use log::debug;

use super::{DistanceTable, SearchState};
use crate::{
    error::{check_vertex, Error, Result},
    graphs::{edge::WeightedEdge, edge_list::EdgeList, Distance, Vertex},
};

/// Single source shortest path distances over arbitrary weights.
///
/// Runs exactly `n - 1` relaxation passes over all arcs followed by one
/// verification pass. If the verification pass still finds an improvement a
/// negative cycle is reachable from `source` and no distances are returned.
pub fn bellman_ford(edge_list: &EdgeList, source: Vertex) -> Result<DistanceTable> {
    let number_of_vertices = edge_list.number_of_vertices();
    check_vertex(source, number_of_vertices)?;

    let mut data = DistanceTable::new(number_of_vertices, source);
    debug!("bellman ford from {}: {}", source, SearchState::Initialized);

    debug!(
        "bellman ford from {}: {} with {} passes over {} arcs",
        source,
        SearchState::Relaxing,
        number_of_vertices - 1,
        edge_list.edges().len()
    );
    for _ in 1..number_of_vertices {
        for edge in edge_list.edges() {
            if let Some(candidate) = candidate_distance(&data, edge) {
                data.relax(edge.head(), candidate);
            }
        }
    }

    let still_improving = edge_list.edges().iter().find(|edge| {
        candidate_distance(&data, edge)
            .is_some_and(|candidate| data.improves(edge.head(), candidate))
    });
    if let Some(edge) = still_improving {
        debug!(
            "bellman ford from {}: {} at arc {} -> {}",
            source,
            SearchState::NegativeCycleDetected,
            edge.tail(),
            edge.head()
        );
        return Err(Error::NegativeCycleDetected);
    }

    debug!("bellman ford from {}: {}", source, SearchState::Converged);
    Ok(data)
}

/// Distance of the head when reached over `edge`, `None` if the tail is not
/// reachable yet.
fn candidate_distance(data: &DistanceTable, edge: &WeightedEdge) -> Option<Distance> {
    data.get(edge.tail())
        .map(|distance| distance + Distance::from(edge.weight()))
}

#[cfg(test)]
mod tests {
    use super::bellman_ford;
    use crate::{
        error::Error,
        graphs::{edge::WeightedEdge, edge_list::EdgeList, negative_cycle_test_graph},
    };

    #[test]
    fn negative_cycle() {
        let (number_of_vertices, edges) = negative_cycle_test_graph();
        let edge_list = EdgeList::from_directed(number_of_vertices, &edges).unwrap();

        assert!(matches!(
            bellman_ford(&edge_list, 0),
            Err(Error::NegativeCycleDetected)
        ));
    }

    #[test]
    fn negative_weights_without_cycle() {
        let edges = vec![
            WeightedEdge::new(0, 1, 4),
            WeightedEdge::new(0, 2, 5),
            WeightedEdge::new(2, 1, -3),
            WeightedEdge::new(1, 3, 2),
        ];
        let edge_list = EdgeList::from_directed(4, &edges).unwrap();

        let data = bellman_ford(&edge_list, 0).unwrap();
        assert_eq!(data.distances(), &[Some(0), Some(2), Some(5), Some(4)]);
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let edges = vec![
            WeightedEdge::new(0, 1, 3),
            WeightedEdge::new(2, 3, -1),
            WeightedEdge::new(3, 2, -1),
        ];
        let edge_list = EdgeList::from_directed(4, &edges).unwrap();

        let data = bellman_ford(&edge_list, 0).unwrap();
        assert_eq!(data.distances(), &[Some(0), Some(3), None, None]);
    }

    #[test]
    fn edge_order_does_not_matter() {
        // arcs listed against the path direction need all n - 1 passes
        let edges = vec![
            WeightedEdge::new(3, 4, 1),
            WeightedEdge::new(2, 3, 1),
            WeightedEdge::new(1, 2, 1),
            WeightedEdge::new(0, 1, 1),
        ];
        let edge_list = EdgeList::from_directed(5, &edges).unwrap();

        let data = bellman_ford(&edge_list, 0).unwrap();
        assert_eq!(
            data.distances(),
            &[Some(0), Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn single_vertex() {
        let edge_list = EdgeList::new(1);
        let data = bellman_ford(&edge_list, 0).unwrap();
        assert_eq!(data.distances(), &[Some(0)]);
    }

    #[test]
    fn out_of_range_source() {
        let edge_list = EdgeList::new(0);
        assert!(matches!(
            bellman_ford(&edge_list, 0),
            Err(Error::VertexOutOfRange { .. })
        ));
    }
}
