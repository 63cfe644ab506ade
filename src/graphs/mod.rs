use edge::WeightedEdge;

pub mod edge;
pub mod edge_list;
pub mod graph_factory;
pub mod vec_vec_graph;

pub type Vertex = u32;
pub type Weight = i32;

/// Sum of weights along a path. A simple path has fewer than `u32::MAX`
/// edges, so summing `i32` weights can not overflow.
pub type Distance = i64;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + Send + '_> {
        Box::new(0..self.number_of_vertices())
    }

    /// Outgoing arcs of `tail` in insertion order.
    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn all_edges(&self) -> Vec<WeightedEdge> {
        self.vertices()
            .flat_map(|vertex| self.edges(vertex))
            .collect()
    }
}

/// Graph on four vertices with undirected edges `(0,1,4) (0,2,1) (1,2,2)
/// (2,3,5)` and the expected distances from vertex 0.
pub fn small_test_graph() -> (u32, Vec<WeightedEdge>, Vec<Option<Distance>>) {
    let edges = vec![
        WeightedEdge::new(0, 1, 4),
        WeightedEdge::new(0, 2, 1),
        WeightedEdge::new(1, 2, 2),
        WeightedEdge::new(2, 3, 5),
    ];
    let distances = vec![Some(0), Some(3), Some(1), Some(6)];

    (4, edges, distances)
}

/// Graph with a negative cycle `0 -> 1 -> 2 -> 0` of total weight -3.
pub fn negative_cycle_test_graph() -> (u32, Vec<WeightedEdge>) {
    let edges = vec![
        WeightedEdge::new(0, 1, 1),
        WeightedEdge::new(1, 2, -2),
        WeightedEdge::new(2, 0, -2),
    ];

    (3, edges)
}
