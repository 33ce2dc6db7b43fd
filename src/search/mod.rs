//! The A* search over a [`Grid`](crate::Grid).

mod a_star;
pub use a_star::{find_path, find_path_with_config};

mod config;
pub use config::SearchConfig;

mod node;

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::find_paths;

use crate::{Cell, Path};

/// How a search run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// the goal was reached
    Found,
    /// every reachable Cell was expanded without reaching the goal
    Exhausted,
    /// the search stopped after expanding [`SearchConfig::max_expanded`] Cells
    Truncated,
}

/// The outcome of a single search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// the cheapest Path from start to goal, or `None` if none was found
    pub path: Option<Path>,
    /// every Cell the search expanded, in expansion order, each at most once
    pub visited: Vec<Cell>,
    /// how the search ended
    pub status: SearchStatus,
}

impl SearchResult {
    /// `true` if a Path was found
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The number of Cells the search expanded
    pub fn nodes_explored(&self) -> usize {
        self.visited.len()
    }
}
