use super::node::{reconstruct, FrontierEntry, NodeArena, SearchNode};
use super::{SearchConfig, SearchResult, SearchStatus};
use crate::{
    neighbors::{heuristic, move_cost},
    Cell, CellMap, CellSet, Endpoint, Grid, Path, SearchError,
};

use std::collections::BinaryHeap;

/// Searches a [`Grid`] for the cheapest Path from `start` to `end` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Same as [`find_path_with_config`] with the default [`SearchConfig`].
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_astar::{find_path, Grid, SearchStatus};
/// let grid = Grid::open(5, 5);
///
/// let result = find_path(&grid, (0, 0), (4, 4)).unwrap();
///
/// assert_eq!(result.status, SearchStatus::Found);
/// let path = result.path.unwrap();
/// assert_eq!(path, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
/// assert!((path.cost() - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn find_path(grid: &Grid, start: Cell, end: Cell) -> Result<SearchResult, SearchError> {
    find_path_with_config(grid, start, end, SearchConfig::default())
}

/// Searches a [`Grid`] for the cheapest Path from `start` to `end`.
///
/// ## Arguments
/// - `grid` - the Grid to search. It is only read.
/// - `start` - the Cell the Path starts at
/// - `end` - the Cell the Path should reach
/// - `config` - limits for the search. (See [`SearchConfig`])
///
/// ## Returns
/// A [`SearchError`] if either endpoint lies outside of the Grid or on a blocked Cell. The
/// endpoints are checked in the order: start in bounds, end in bounds, start walkable,
/// end walkable. Nothing is searched in that case.
///
/// Otherwise a [`SearchResult`] with the Path (or `None` if `end` cannot be reached) and the
/// Cells in the order they were expanded. The first Cell of the Path is always `start` and the
/// last is `end`. If `start == end`, the Path is just `[start]` with a Cost of `0`.
///
/// ## Examples
/// ```
/// # use grid_astar::{find_path_with_config, Grid, SearchConfig, SearchStatus};
/// let grid = Grid::open(64, 64);
///
/// let result = find_path_with_config(&grid, (0, 0), (63, 0), SearchConfig::with_limit(10)).unwrap();
///
/// assert_eq!(result.status, SearchStatus::Truncated);
/// assert!(result.path.is_none());
/// assert_eq!(result.visited.len(), 10);
/// ```
pub fn find_path_with_config(
    grid: &Grid,
    start: Cell,
    end: Cell,
    config: SearchConfig,
) -> Result<SearchResult, SearchError> {
    if let Err(err) = validate(grid, start, end) {
        #[cfg(feature = "log")]
        log::trace!("rejected search: {}", err);
        return Err(err);
    }

    #[cfg(feature = "log")]
    let timer = std::time::Instant::now();

    let result = a_star_search(grid, start, end, config);

    #[cfg(feature = "log")]
    log::debug!(
        "{:?} -> {:?}: {:?} after expanding {} cells in {:?}",
        start,
        end,
        result.status,
        result.visited.len(),
        timer.elapsed()
    );

    Ok(result)
}

fn validate(grid: &Grid, start: Cell, end: Cell) -> Result<(), SearchError> {
    let endpoints = [(Endpoint::Start, start), (Endpoint::End, end)];
    for &(endpoint, cell) in endpoints.iter() {
        if !grid.is_in_bounds(cell) {
            return Err(SearchError::OutOfBounds { endpoint, cell });
        }
    }
    for &(endpoint, cell) in endpoints.iter() {
        if !grid.is_walkable(cell) {
            return Err(SearchError::Blocked { endpoint, cell });
        }
    }
    Ok(())
}

fn a_star_search(grid: &Grid, start: Cell, end: Cell, config: SearchConfig) -> SearchResult {
    let size_hint = config.size_hint;
    let mut nodes = NodeArena::with_capacity(size_hint);
    let mut next = BinaryHeap::with_capacity(size_hint / 2);
    let mut best_cost = CellMap::with_capacity(size_hint);
    let mut closed = CellSet::with_capacity(size_hint);
    let mut visited = vec![];

    let root = SearchNode::new(start, None, 0.0, heuristic(start, end));
    let root_index = nodes.insert(root);
    next.push(FrontierEntry::new(root_index, &root));
    best_cost.insert(start, 0.0);

    let mut all_neighbors = vec![];

    while let Some(FrontierEntry {
        node: current_index,
        position: current_id,
        ..
    }) = next.pop()
    {
        // stale entries: a cheaper Node for the same Cell was queued later
        if closed.contains(&current_id) {
            continue;
        }
        let current = nodes[current_index];
        if current.g > best_cost[&current_id] {
            continue;
        }

        // the start Cell is always expanded, whatever the limit
        if config
            .max_expanded
            .is_some_and(|max| visited.len() >= max.max(1))
        {
            return SearchResult {
                path: None,
                visited,
                status: SearchStatus::Truncated,
            };
        }

        visited.push(current_id);

        if current_id == end {
            let path = Path::new(reconstruct(&nodes, current_index), current.g);
            return SearchResult {
                path: Some(path),
                visited,
                status: SearchStatus::Found,
            };
        }

        closed.insert(current_id);

        all_neighbors.clear();
        grid.neighbors(current_id, &mut all_neighbors);
        for &other_id in all_neighbors.iter() {
            if closed.contains(&other_id) {
                continue;
            }
            let other_cost = current.g + move_cost(current_id, other_id);

            let mut needs_visit = true;
            if let Some(prev_cost) = best_cost.get_mut(&other_id) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                } else {
                    needs_visit = false;
                }
            } else {
                best_cost.insert(other_id, other_cost);
            }

            if needs_visit {
                let node = SearchNode::new(
                    other_id,
                    Some(current_index),
                    other_cost,
                    heuristic(other_id, end),
                );
                let index = nodes.insert(node);
                next.push(FrontierEntry::new(index, &node));
            }
        }
    }

    SearchResult {
        path: None,
        visited,
        status: SearchStatus::Exhausted,
    }
}
