use std::fmt;

pub use collections::distance_table::DistanceTable;

pub mod bellman_ford;
pub mod collections;
pub mod dijkstra;

/// Lifecycle of a single source search. `Converged` yields a distance table,
/// `NegativeCycleDetected` yields none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Relaxing,
    Converged,
    NegativeCycleDetected,
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchState::Initialized => "initialized",
            SearchState::Relaxing => "relaxing",
            SearchState::Converged => "converged",
            SearchState::NegativeCycleDetected => "negative cycle detected",
        };
        f.write_str(name)
    }
}
