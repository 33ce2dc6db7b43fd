use crate::{Cell, CellSet, Grid, SearchResult};

/// Draws a search result on top of its Grid, one line per row.
///
/// ```no_code
/// S: start, E: end, *: Path, o: visited, #: blocked, .: open
/// ```
///
/// Start and end are drawn over everything else, and Path Cells over visited Cells.
///
/// ## Examples
/// ```
/// # use grid_astar::{find_path, render, Grid};
/// let grid = Grid::from_rows(&[
///     [0u8, 0, 0, 0],
///     [0, 1, 1, 0],
///     [0, 0, 0, 0],
/// ])
/// .unwrap();
/// let result = find_path(&grid, (0, 0), (3, 2)).unwrap();
///
/// let drawing = render(&grid, (0, 0), (3, 2), &result);
/// assert_eq!(drawing.lines().count(), 3);
/// assert!(drawing.starts_with('S'));
/// assert!(drawing.trim_end().ends_with('E'));
/// ```
pub fn render(grid: &Grid, start: Cell, end: Cell, result: &SearchResult) -> String {
    let path: CellSet = result
        .path
        .iter()
        .flat_map(|path| path.iter().copied())
        .collect();
    let visited: CellSet = result.visited.iter().copied().collect();

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            let cell = (x, y);
            let c = if cell == start {
                'S'
            } else if cell == end {
                'E'
            } else if !grid.is_walkable(cell) {
                '#'
            } else if path.contains(&cell) {
                '*'
            } else if visited.contains(&cell) {
                'o'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
