//! The request and response shapes of a "solve" call, for whatever transport sits in front.

use crate::{find_path, Cell, Error, Grid, SearchResult};

/// A complete pathfinding request: a 0/1 matrix and the two endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// rows of the Grid, `0` = walkable, `1` = blocked
    pub grid: Vec<Vec<u8>>,
    /// the Cell to start from, as `[x, y]`
    pub start: Cell,
    /// the Cell to reach, as `[x, y]`
    pub end: Cell,
}

/// The flattened answer to a [`SolveRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// the Cells of the Path from start to end, or `None` if the end cannot be reached
    pub path: Option<Vec<Cell>>,
    /// the number of Cells in `path`, `0` if there is none
    pub path_length: usize,
    /// the number of Cells the search expanded
    pub nodes_explored: usize,
    /// the expanded Cells, in expansion order
    pub visited: Vec<Cell>,
    /// `true` if a Path was found
    pub success: bool,
}

impl From<SearchResult> for SolveResponse {
    fn from(result: SearchResult) -> SolveResponse {
        let path = result.path.map(|path| path.into_cells());
        SolveResponse {
            path_length: path.as_ref().map_or(0, Vec::len),
            nodes_explored: result.visited.len(),
            success: path.is_some(),
            path,
            visited: result.visited,
        }
    }
}

/// Builds the Grid of a [`SolveRequest`], searches it and flattens the result.
///
/// An unreachable end is a successful call with `success == false`. Errors are only returned
/// for malformed Grids and invalid endpoints.
///
/// ## Examples
/// ```
/// # use grid_astar::{solve, SolveRequest};
/// let request = SolveRequest {
///     grid: vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]],
///     start: (0, 0),
///     end: (0, 2),
/// };
///
/// let response = solve(&request).unwrap();
///
/// assert!(response.success);
/// assert_eq!(response.path_length, response.path.unwrap().len());
/// assert_eq!(response.nodes_explored, response.visited.len());
/// ```
pub fn solve(request: &SolveRequest) -> Result<SolveResponse, Error> {
    let grid = Grid::from_rows(request.grid.as_slice())?;
    let result = find_path(&grid, request.start, request.end)?;
    Ok(result.into())
}
