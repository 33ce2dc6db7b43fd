use super::{find_path_with_config, SearchConfig, SearchResult};
use crate::{Cell, Grid, SearchError};
use rayon::prelude::*;

/// Runs one independent search per `(start, end)` pair on the same [`Grid`], in parallel.
///
/// Every search owns its own frontier and Nodes, only the Grid is shared. The results are in
/// the same order as `queries` and are identical to calling
/// [`find_path_with_config`] for each pair one after the other.
///
/// ## Examples
/// ```
/// # use grid_astar::{find_paths, Grid, SearchConfig};
/// let grid = Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
///
/// let results = find_paths(&grid, &[((0, 0), (2, 2)), ((0, 0), (1, 1))], SearchConfig::default());
///
/// assert!(results[0].as_ref().unwrap().path.is_some());
/// assert!(results[1].is_err());
/// ```
pub fn find_paths(
    grid: &Grid,
    queries: &[(Cell, Cell)],
    config: SearchConfig,
) -> Vec<Result<SearchResult, SearchError>> {
    queries
        .par_iter()
        .map(|&(start, end)| find_path_with_config(grid, start, end, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_path;

    #[test]
    fn matches_sequential() {
        let rows: [[u8; 6]; 4] = [
            [0, 0, 0, 1, 0, 0],
            [0, 1, 0, 1, 0, 0],
            [0, 1, 0, 0, 0, 1],
            [0, 0, 0, 1, 0, 0],
        ];
        let grid = Grid::from_rows(&rows).unwrap();
        let queries = [
            ((0, 0), (5, 3)),
            ((5, 0), (0, 3)),
            ((2, 2), (2, 2)),
            ((0, 0), (3, 0)),
            ((4, 1), (9, 9)),
        ];

        let parallel = find_paths(&grid, &queries, SearchConfig::default());
        let sequential: Vec<_> = queries
            .iter()
            .map(|&(start, end)| find_path(&grid, start, end))
            .collect();

        assert_eq!(parallel, sequential);
    }
}
