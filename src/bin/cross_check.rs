use std::{fs::File, io::BufWriter, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::{error, info};
use shortest_paths::utility::random_cross_checks;

/// Runs both searches on random graphs with non-negative weights and reports
/// every graph on which their distances differ.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random graphs
    #[arg(short, long, default_value = "1000")]
    number_of_graphs: usize,

    /// Largest number of vertices of a random graph
    #[arg(short = 'v', long, default_value = "100")]
    max_number_of_vertices: u32,

    /// Largest edge weight
    #[arg(short = 'w', long, default_value = "100", value_parser = clap::value_parser!(i32).range(0..))]
    max_weight: i32,

    /// Seed of the first graph
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Path where failing graphs will be saved as json
    #[arg(short, long)]
    failures: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    let start = Instant::now();
    let failures = match random_cross_checks(
        args.number_of_graphs,
        args.max_number_of_vertices,
        args.max_weight,
        args.seed,
    ) {
        Ok(failures) => failures,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("took {:?}", start.elapsed());
    println!(
        "{} of {} graphs disagree",
        failures.len(),
        args.number_of_graphs
    );

    if let Some(path) = &args.failures {
        let written = File::create(path)
            .map_err(serde_json::Error::io)
            .and_then(|file| serde_json::to_writer(BufWriter::new(file), &failures));
        if let Err(err) = written {
            error!("unable to write failures to {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    }

    if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
