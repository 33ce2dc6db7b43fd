use crate::{neighbors::OFFSETS, Cell, GridError};

/// The state of a single Cell on a [`Grid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// can be walked across (`0`)
    Walkable = 0,
    /// cannot be entered (`1`)
    Blocked = 1,
}

impl TryFrom<u8> for Tile {
    type Error = u8;
    fn try_from(value: u8) -> Result<Tile, u8> {
        match value {
            0 => Ok(Tile::Walkable),
            1 => Ok(Tile::Blocked),
            other => Err(other),
        }
    }
}

/// An immutable, rectangular occupancy map.
///
/// Rows are stored top to bottom and a Cell `(x, y)` refers to column `x` of row `y`.
/// Width and height are fixed when the Grid is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a Grid from a matrix of rows, where `0` is walkable and `1` is blocked.
    ///
    /// An empty matrix gives a Grid of size `0 x 0`, on which every Cell is out of bounds.
    ///
    /// ## Examples
    /// ```
    /// # use grid_astar::{Grid, GridError};
    /// let grid = Grid::from_rows(&[[0u8, 0, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert!(grid.is_walkable((1, 0)));
    /// assert!(!grid.is_walkable((2, 0)));
    ///
    /// let ragged: &[&[u8]] = &[&[0, 0], &[0]];
    /// assert_eq!(
    ///     Grid::from_rows(ragged),
    ///     Err(GridError::Ragged { row: 1, expected: 2, found: 1 }),
    /// );
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let tile =
                    Tile::try_from(value).map_err(|value| GridError::InvalidTile { x, y, value })?;
                tiles.push(tile);
            }
        }

        Ok(Grid {
            width,
            height,
            tiles,
        })
    }

    /// Creates a Grid of the given size without any blocked Cells
    pub fn open(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            tiles: vec![Tile::Walkable; width * height],
        }
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `0 <= x < width` and `0 <= y < height`
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// `true` if the Cell is inside the Grid and not blocked
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.tile(cell) == Some(Tile::Walkable)
    }

    /// The Tile at a Cell, or `None` if the Cell is out of bounds
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.index(cell).map(|i| self.tiles[i])
    }

    /// Appends all walkable neighbors of `cell` to `target`, in the order of [`OFFSETS`].
    ///
    /// `target` is not cleared, so that a single buffer can be reused across calls.
    ///
    /// ## Examples
    /// ```
    /// # use grid_astar::Grid;
    /// let grid = Grid::from_rows(&[[0u8, 1], [0, 0]]).unwrap();
    /// let mut neighbors = vec![];
    /// grid.neighbors((0, 0), &mut neighbors);
    /// assert_eq!(neighbors, vec![(0, 1), (1, 1)]);
    /// ```
    pub fn neighbors(&self, cell: Cell, target: &mut Vec<Cell>) {
        target.extend(
            OFFSETS
                .iter()
                .filter_map(|&(dx, dy)| Some((cell.0.checked_add(dx)?, cell.1.checked_add(dy)?)))
                .filter(|&other| self.is_walkable(other)),
        );
    }

    fn index(&self, (x, y): Cell) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }
}
