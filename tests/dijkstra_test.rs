use shortest_paths::{
    graphs::{
        edge::WeightedEdge, graph_factory::GraphFactory, small_test_graph,
        vec_vec_graph::VecVecGraph, Distance,
    },
    queue::radix_queue::RadixQueue,
    search::dijkstra::{dijkstra, dijkstra_with_queue},
};

fn get_larger_graph() -> VecVecGraph {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let edges = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ]
    .map(|(tail, head, weight)| WeightedEdge::new(tail, head, weight));

    VecVecGraph::from_undirected_edges(11, &edges).unwrap()
}

#[test]
fn dijkstra_small_graph() {
    let (number_of_vertices, edges, distances) = small_test_graph();
    let graph = VecVecGraph::from_undirected_edges(number_of_vertices, &edges).unwrap();

    let data = dijkstra(&graph, 0).unwrap();
    assert_eq!(data.distances(), distances.as_slice());
    assert_eq!(
        data.to_string(),
        "Vertex 0 -> Distance: 0\nVertex 1 -> Distance: 3\nVertex 2 -> Distance: 1\nVertex 3 -> Distance: 6\n"
    );
}

#[test]
fn dijkstra_larger_graph() {
    let graph = get_larger_graph();

    let data = dijkstra(&graph, 0).unwrap();
    let expected: [Option<Distance>; 11] = [0, 3, 5, 7, 9, 10, 11, 8, 9, 6, 3].map(Some);
    assert_eq!(data.distances(), expected.as_slice());
}

#[test]
fn dijkstra_larger_graph_radix_queue() {
    let graph = get_larger_graph();

    for source in 0..11 {
        let heap = dijkstra(&graph, source).unwrap();
        let radix = dijkstra_with_queue(&graph, source, &mut RadixQueue::new()).unwrap();
        assert_eq!(heap, radix);
    }
}

#[test]
fn dijkstra_is_symmetric_on_undirected_graph() {
    let graph = get_larger_graph();

    for source in 0..11 {
        let from_source = dijkstra(&graph, source).unwrap();
        for target in 0..11 {
            let from_target = dijkstra(&graph, target).unwrap();
            assert_eq!(from_source.get(target), from_target.get(source));
        }
    }
}

#[test]
fn dijkstra_negative_input_returns() {
    let input = "2 1\n0 1 -1\n0\n";
    let problem = GraphFactory::from_reader(input.as_bytes()).unwrap();
    let graph =
        VecVecGraph::from_undirected_edges(problem.number_of_vertices, &problem.edges).unwrap();

    let heap = dijkstra(&graph, problem.source).unwrap();
    let radix = dijkstra_with_queue(&graph, problem.source, &mut RadixQueue::new()).unwrap();
    assert_eq!(heap.get(problem.source), Some(0));
    assert_eq!(heap, radix);
}
