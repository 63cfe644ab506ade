use std::{io::BufRead, path::Path};

use graphs::graph_factory::{GraphFactory, ShortestPathInput};

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;

/// Reads a problem from `path`, or from stdin if no path is given.
pub fn read_input(path: Option<&Path>) -> error::Result<ShortestPathInput> {
    GraphFactory::from_reader(open_input(path)?)
}

/// Opens `path` for reading, or stdin if no path is given.
pub fn open_input(path: Option<&Path>) -> error::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };
    Ok(reader)
}
