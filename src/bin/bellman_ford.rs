use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info};
use shortest_paths::{
    error::{Error, Result},
    graphs::edge_list::EdgeList,
    read_input,
    search::{bellman_ford::bellman_ford, DistanceTable},
};

/// Prints the distance from the source to every vertex, or a message if a
/// negative cycle is reachable. Each input triple is an arc unless
/// `--undirected` is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Expand every triple into two arcs
    #[arg(short, long)]
    undirected: bool,

    /// Print the distances as json
    #[arg(short, long)]
    json: bool,
}

fn run(args: &Args) -> Result<DistanceTable> {
    let input = read_input(args.input.as_deref())?;

    let edge_list = if args.undirected {
        EdgeList::from_undirected(input.number_of_vertices, &input.edges)?
    } else {
        EdgeList::from_directed(input.number_of_vertices, &input.edges)?
    };
    info!(
        "searching from {} on {} vertices and {} arcs",
        input.source,
        input.number_of_vertices,
        edge_list.edges().len()
    );

    bellman_ford(&edge_list, input.source)
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
        Err(Error::NegativeCycleDetected) => {
            println!("{}", Error::NegativeCycleDetected);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
