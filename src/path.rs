use crate::{Cell, Cost};

/// A Path found by the search.
///
/// Stores the sequence of Cells from start to goal (both included) and the total Cost of
/// walking along them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
    cost: Cost,
}

impl Path {
    /// creates a new Path with the given sequence of Cells and total Cost
    ///
    /// ## Examples
    /// ```
    /// # use grid_astar::Path;
    /// let path = Path::new(vec![(0, 0), (1, 0)], 1.0);
    ///
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path.cost(), 1.0);
    /// ```
    pub fn new(cells: Vec<Cell>, cost: Cost) -> Path {
        Path { cells, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Cells in the Path, including start and goal
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the Path contains no Cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number of steps taken, which is one less than the number of Cells
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The first Cell of the Path
    pub fn start(&self) -> Option<&Cell> {
        self.cells.first()
    }

    /// The last Cell of the Path
    pub fn end(&self) -> Option<&Cell> {
        self.cells.last()
    }

    /// The Cells of the Path, from start to goal
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns an Iterator over the Cells of the Path
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Consumes the Path, returning its Cells
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

use std::ops::Index;

impl Index<usize> for Path {
    type Output = Cell;
    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl PartialEq<Vec<Cell>> for Path {
    fn eq(&self, rhs: &Vec<Cell>) -> bool {
        &self.cells == rhs
    }
}

impl<'a> PartialEq<&'a [Cell]> for Path {
    fn eq(&self, rhs: &&'a [Cell]) -> bool {
        self.cells.as_slice() == *rhs
    }
}

use std::cmp::Ordering;

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Path) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {:.3}]: ", self.cost)?;
        if self.cells.is_empty() {
            write!(fmt, "<empty>")
        } else {
            let (x, y) = self.cells[0];
            write!(fmt, "({}, {})", x, y)?;
            for (x, y) in self.cells.iter().skip(1) {
                write!(fmt, " -> ({}, {})", x, y)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![(4, 0), (3, 1), (2, 1)], 2.0);

        assert_eq!(path[0], (4, 0));
        assert_eq!(path[1], (3, 1));
        assert_eq!(path[2], (2, 1));
        assert_eq!(path.steps(), 2);
    }

    #[test]
    fn iterate() {
        let path = Path::new(vec![(0, 0), (1, 1), (2, 1)], 1.0 + std::f64::consts::SQRT_2);

        let by_iter: Vec<_> = path.iter().copied().collect();
        let by_ref: Vec<_> = (&path).into_iter().copied().collect();
        assert_eq!(by_iter, path.cells());
        assert_eq!(by_ref, by_iter);
        assert_eq!(path.into_cells(), by_iter);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![(0, 0), (1, 1), (1, 2)], 1.0 + std::f64::consts::SQRT_2);

        assert_eq!(
            &format!("{}", path),
            "Path[Cost = 2.414]: (0, 0) -> (1, 1) -> (1, 2)"
        );
    }

    #[test]
    fn display_empty() {
        let path = Path::new(vec![], 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0.000]: <empty>");
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn compare() {
        let short = Path::new(vec![(0, 0), (0, 1)], 1.0);
        let long = Path::new(vec![(0, 0), (1, 1)], std::f64::consts::SQRT_2);

        assert!(short < long);
        assert_eq!(short, vec![(0, 0), (0, 1)]);
    }
}
