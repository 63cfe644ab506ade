use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info, warn};
use shortest_paths::{
    error::Result,
    graphs::{graph_factory::GraphFactory, vec_vec_graph::VecVecGraph},
    open_input,
};

/// Builds an undirected graph from `V E` and `E` vertex pairs, removes the
/// `K` pairs that follow and prints the adjacency lists.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print one `tail->head` line per arc instead of one line per vertex
    #[arg(short, long)]
    arcs: bool,
}

fn run(args: &Args) -> Result<VecVecGraph> {
    let reader = open_input(args.input.as_deref())?;
    let mut removal_input = GraphFactory::edge_removals_from_reader(reader)?;

    for &(tail, head) in removal_input.removals.iter() {
        if !removal_input.graph.remove_edge_bidirectional(tail, head)? {
            warn!("no edge between {} and {} to remove", tail, head);
        }
    }
    info!("removed {} edges", removal_input.removals.len());

    Ok(removal_input.graph)
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    match run(&args) {
        Ok(graph) if args.arcs => {
            graph.arcs().iter().for_each(|arc| println!("{}", arc));
            ExitCode::SUCCESS
        }
        Ok(graph) => {
            print!("{}", graph);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
