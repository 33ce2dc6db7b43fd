//! The movement model: which Cells are adjacent, what a step costs, and how far the goal is.
//!
//! Agents move along the 4 cardinal directions and the 4 diagonals.
//!
//! Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
//!
//! ```no_code
//! A: Agent, o: reachable in one step
//! o o o
//!  \|/
//! o-A-o
//!  /|\
//! o o o
//! ```

use crate::{Cell, Cost};

/// The offsets to all 8 neighbors of a Cell, in the order they are considered by the search.
///
/// The order decides which of several equally good candidates is found first, so it is part of
/// what makes a search reproducible.
pub const OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// The Cost of a single step between two adjacent Cells.
///
/// Cardinal steps cost `1`, diagonal steps (both coordinates change) cost `√2`.
///
/// ## Examples
/// ```
/// # use grid_astar::neighbors::move_cost;
/// assert_eq!(move_cost((2, 2), (2, 3)), 1.0);
/// assert_eq!(move_cost((2, 2), (3, 3)), std::f64::consts::SQRT_2);
/// ```
pub fn move_cost(from: Cell, to: Cell) -> Cost {
    if from.0 != to.0 && from.1 != to.1 {
        std::f64::consts::SQRT_2
    } else {
        1.0
    }
}

/// Gives the straight-line (Euclidean) distance from `point` to `goal`.
///
/// This never overestimates the Cost of an 8-connected Path with `√2` diagonals, and it satisfies
/// the triangle inequality for single steps, so a Cell is final the first time it is expanded.
///
/// ## Examples
/// ```
/// # use grid_astar::neighbors::heuristic;
/// assert_eq!(heuristic((0, 0), (3, 4)), 5.0);
/// ```
pub fn heuristic(point: Cell, goal: Cell) -> Cost {
    let dx = goal.0 as f64 - point.0 as f64;
    let dy = goal.1 as f64 - point.1 as f64;
    dx.hypot(dy)
}

/// The true Cost of moving from `point` to `goal` on a Grid without obstacles.
///
/// `min(dx, dy)` diagonal steps plus `|dx - dy|` cardinal steps.
pub fn octile_distance(point: Cell, goal: Cell) -> Cost {
    let dx = goal.0.abs_diff(point.0);
    let dy = goal.1.abs_diff(point.1);
    let (short, long) = if dx < dy { (dx, dy) } else { (dy, dx) };
    short as f64 * std::f64::consts::SQRT_2 + (long - short) as f64
}
