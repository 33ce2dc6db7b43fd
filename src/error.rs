use crate::Cell;
use std::fmt;
use thiserror::Error;

/// Which end of a search a [`SearchError`] refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// the Cell the search starts from
    Start,
    /// the Cell the search tries to reach
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(fmt, "Start"),
            Endpoint::End => write!(fmt, "End"),
        }
    }
}

/// Errors when building a [`Grid`](crate::Grid) from a matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// a row does not have the same length as the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
    /// a Tile is neither `0` (walkable) nor `1` (blocked)
    #[error("cell ({x}, {y}) has value {value}, expected 0 or 1")]
    InvalidTile {
        /// column of the Tile
        x: usize,
        /// row of the Tile
        y: usize,
        /// the value that was found
        value: u8,
    },
}

/// Errors for invalid start or end Cells, raised before any searching happens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// the Cell lies outside of the Grid
    #[error("{endpoint} position ({}, {}) is out of bounds", .cell.0, .cell.1)]
    OutOfBounds {
        /// which endpoint was invalid
        endpoint: Endpoint,
        /// the invalid Cell
        cell: Cell,
    },
    /// the Cell is inside the Grid but not walkable
    #[error("{endpoint} position ({}, {}) is blocked", .cell.0, .cell.1)]
    Blocked {
        /// which endpoint was invalid
        endpoint: Endpoint,
        /// the invalid Cell
        cell: Cell,
    },
}

impl SearchError {
    /// The endpoint that failed validation
    pub fn endpoint(&self) -> Endpoint {
        match *self {
            SearchError::OutOfBounds { endpoint, .. } | SearchError::Blocked { endpoint, .. } => {
                endpoint
            }
        }
    }

    /// The Cell that failed validation
    pub fn cell(&self) -> Cell {
        match *self {
            SearchError::OutOfBounds { cell, .. } | SearchError::Blocked { cell, .. } => cell,
        }
    }
}

/// Any error that can occur while answering a [`SolveRequest`](crate::SolveRequest)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// the Grid could not be built
    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),
    /// the start or end Cell is invalid
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SearchError::OutOfBounds {
            endpoint: Endpoint::End,
            cell: (5, -1),
        };
        assert_eq!(err.to_string(), "End position (5, -1) is out of bounds");

        let err = SearchError::Blocked {
            endpoint: Endpoint::Start,
            cell: (0, 0),
        };
        assert_eq!(err.to_string(), "Start position (0, 0) is blocked");
        assert_eq!(err.cell(), (0, 0));
        assert_eq!(err.endpoint(), Endpoint::Start);
    }

    #[test]
    fn wrapped() {
        let err: Error = GridError::Ragged {
            row: 2,
            expected: 3,
            found: 1,
        }
        .into();
        assert_eq!(err.to_string(), "malformed grid: row 2 has 1 cells, expected 3");
    }
}
