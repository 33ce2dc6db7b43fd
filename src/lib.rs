#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Paths on 2D occupancy Grids using A* and report what the search looked at.
//!
//! ## Introduction
//! An occupancy Grid is a rectangular matrix of `0` (walkable) and `1` (blocked) Tiles. Agents
//! move across it in 8 directions: the 4 cardinal steps cost `1`, the 4 diagonal steps cost `√2`.
//! [`find_path`] searches such a Grid with A* guided by the Euclidean distance to the goal and
//! returns two things:
//! - the cheapest [`Path`] from start to goal, if one exists
//! - every Cell the search expanded, in the order it expanded them
//!
//! The second part is meant for diagnostics and visualization: it shows how much of the Grid the
//! heuristic allowed the search to skip.
//!
//! The search itself is deterministic. When two candidates have the same estimated total Cost,
//! the one closer to the goal is expanded first, and after that the smaller `(x, y)` Cell.
//! Running the same search twice always yields the same Path and the same visited order.
//!
//! ## Examples
//! ```
//! use grid_astar::{find_path, Grid};
//!
//! // 0 = empty, 1 = wall
//! let grid = Grid::from_rows(&[
//!     [0u8, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 1, 0],
//!     [1, 1, 0, 1, 0],
//!     [0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let result = find_path(&grid, (0, 0), (2, 2)).unwrap();
//!
//! let path = result.path.as_ref().unwrap();
//! assert_eq!(path.start(), Some(&(0, 0)));
//! assert_eq!(path.end(), Some(&(2, 2)));
//! assert!(result.visited.contains(&(0, 0)));
//! ```
//!
//! Invalid endpoints are rejected before any searching happens:
//! ```
//! use grid_astar::{find_path, Endpoint, Grid, SearchError};
//!
//! let grid = Grid::from_rows(&[[1u8, 0], [0, 0]]).unwrap();
//!
//! assert_eq!(
//!     find_path(&grid, (0, 0), (1, 1)),
//!     Err(SearchError::Blocked { endpoint: Endpoint::Start, cell: (0, 0) }),
//! );
//! ```
//!
//! A goal that cannot be reached is not an error. The result simply has no Path:
//! ```
//! # use grid_astar::{find_path, Grid};
//! let grid = Grid::from_rows(&[[0u8, 1, 0], [0, 1, 0]]).unwrap();
//!
//! let result = find_path(&grid, (0, 0), (2, 1)).unwrap();
//! assert!(result.path.is_none());
//! assert_eq!(result.visited, vec![(0, 0), (0, 1)]);
//! ```
//!
//! ### Configuration
//! [`find_path_with_config`] takes a [`SearchConfig`] that can cap the number of expanded Cells,
//! for callers that need bounded latency on large Grids.
//!
//! ### Cargo Features
//! - `parallel` (default): [`find_paths`] solves many independent queries on one Grid using rayon
//! - `log`: every search logs its endpoints, outcome and timing through the `log` facade
//! - `serde`: `Serialize`/`Deserialize` for [`Path`], [`SolveRequest`] and [`SolveResponse`]

/// A shorthand for Cells on the grid, as `(x, y)`.
///
/// Coordinates are signed so that requests with negative coordinates can be represented and
/// rejected as out of bounds.
pub type Cell = (isize, isize);

/// The Type used to measure the Cost of a Path
pub type Cost = f64;

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Cell`]
pub(crate) type CellMap<V> = hashbrown::HashMap<Cell, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Cell`]s
pub(crate) type CellSet = hashbrown::HashSet<Cell>;

mod error;
pub use self::error::{Endpoint, Error, GridError, SearchError};

mod grid;
pub use self::grid::{Grid, Tile};

pub mod neighbors;

mod path;
pub use self::path::Path;

mod search;
#[cfg(feature = "parallel")]
pub use self::search::find_paths;
pub use self::search::{
    find_path, find_path_with_config, SearchConfig, SearchResult, SearchStatus,
};

mod report;
pub use self::report::{solve, SolveRequest, SolveResponse};

mod render;
pub use self::render::render;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        find_path, find_path_with_config, neighbors::heuristic, neighbors::move_cost, Cell, Cost,
        Grid, Path, SearchConfig, SearchResult, SearchStatus,
    };
}
