use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info};
use shortest_paths::{
    error::Result,
    graphs::vec_vec_graph::VecVecGraph,
    read_input,
    search::{dijkstra::dijkstra, DistanceTable},
};

/// Prints the distance from the source to every vertex. Each input triple is
/// an undirected edge unless `--directed` is given. Weights must not be
/// negative.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat every triple as a single arc
    #[arg(short, long)]
    directed: bool,

    /// Print the distances as json
    #[arg(short, long)]
    json: bool,
}

fn run(args: &Args) -> Result<DistanceTable> {
    let input = read_input(args.input.as_deref())?;

    let graph = if args.directed {
        VecVecGraph::from_edges(input.number_of_vertices, &input.edges)?
    } else {
        VecVecGraph::from_undirected_edges(input.number_of_vertices, &input.edges)?
    };
    info!(
        "searching from {} on {} vertices",
        input.source, input.number_of_vertices
    );

    dijkstra(&graph, input.source)
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    match run(&args) {
        Ok(data) if args.json => match serde_json::to_string(&data) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("{}", err);
                ExitCode::FAILURE
            }
        },
        Ok(data) => {
            print!("{}", data);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
