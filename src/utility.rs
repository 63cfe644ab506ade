use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::warn;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    graphs::{
        edge::WeightedEdge, edge_list::EdgeList, graph_factory::ShortestPathInput,
        vec_vec_graph::VecVecGraph, Distance, Weight,
    },
    search::{bellman_ford::bellman_ford, dijkstra::dijkstra},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// A problem on which both searches disagree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrossCheckFailure {
    pub input: ShortestPathInput,
    pub dijkstra: Vec<Option<Distance>>,
    pub bellman_ford: Vec<Option<Distance>>,
}

/// Random directed graph with `number_of_edges` arcs and weights in
/// `0..=max_weight`. Loops and parallel arcs may occur.
///
/// # Panics
///
/// Panics if `number_of_vertices` is zero or `max_weight` is negative.
pub fn random_input(
    rng: &mut impl Rng,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
) -> ShortestPathInput {
    let edges = (0..number_of_edges)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..=max_weight),
            )
        })
        .collect();

    ShortestPathInput {
        number_of_vertices,
        edges,
        source: rng.gen_range(0..number_of_vertices),
    }
}

/// Runs both searches on the arcs of `input` and returns the distances if
/// they differ.
pub fn cross_check(input: &ShortestPathInput) -> Result<Option<CrossCheckFailure>> {
    let graph = VecVecGraph::from_edges(input.number_of_vertices, &input.edges)?;
    let edge_list = EdgeList::from_directed(input.number_of_vertices, &input.edges)?;

    let dijkstra = dijkstra(&graph, input.source)?;
    let bellman_ford = bellman_ford(&edge_list, input.source)?;

    if dijkstra == bellman_ford {
        return Ok(None);
    }

    warn!(
        "searches disagree on a graph with {} vertices and {} edges from {}",
        input.number_of_vertices,
        input.edges.len(),
        input.source
    );
    Ok(Some(CrossCheckFailure {
        input: input.clone(),
        dijkstra: dijkstra.into_distances(),
        bellman_ford: bellman_ford.into_distances(),
    }))
}

/// Cross checks `number_of_graphs` random graphs with up to
/// `max_number_of_vertices` vertices in parallel. Graph `i` is generated from
/// `seed + i`, so a run is reproducible regardless of scheduling.
pub fn random_cross_checks(
    number_of_graphs: usize,
    max_number_of_vertices: u32,
    max_weight: Weight,
    seed: u64,
) -> Result<Vec<CrossCheckFailure>> {
    let max_number_of_vertices = max_number_of_vertices.max(1);
    let failures: Vec<Option<CrossCheckFailure>> = (0..number_of_graphs)
        .into_par_iter()
        .progress_with(get_progressbar("Cross checking", number_of_graphs as u64))
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let number_of_vertices = rng.gen_range(1..=max_number_of_vertices);
            let number_of_edges = rng.gen_range(0..=number_of_vertices * 3);
            let input = random_input(&mut rng, number_of_vertices, number_of_edges, max_weight);
            cross_check(&input)
        })
        .collect::<Result<_>>()?;

    Ok(failures.into_iter().flatten().collect())
}
