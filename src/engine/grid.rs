//! Square cell grids and the pure shift transformation over them
//!
//! Shifts never mutate their input: each direction produces a fresh grid, which
//! lets move detection simulate all four directions against the same state.

use ndarray::Array2;

use crate::engine::direction::Direction;
use crate::engine::line::{Cell, collapse_toward};

/// Square grid of cells indexed by `(row, col)`
pub type Grid = Array2<Cell>;

/// Outcome of shifting a whole grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shifted {
    /// The grid after every line collapsed
    pub grid: Grid,
    /// Total merge events across all lines
    pub merges: u64,
}

/// Create a grid with every cell empty
pub fn empty_grid(dimension: usize) -> Grid {
    Array2::from_elem((dimension, dimension), None)
}

/// Swap rows and columns: cell `(r, c)` of the result is cell `(c, r)` of `grid`
pub fn transpose(grid: &Grid) -> Grid {
    grid.t().as_standard_layout().into_owned()
}

/// Whether at least one cell is empty
pub fn has_free_cell(grid: &Grid) -> bool {
    grid.iter().any(Option::is_none)
}

/// Coordinates of every empty cell, walking columns left to right
pub fn free_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let (rows, cols) = grid.dim();
    (0..cols)
        .flat_map(|col| (0..rows).map(move |row| (row, col)))
        .filter(|&position| grid.get(position).is_some_and(Option::is_none))
        .collect()
}

/// Shift every tile of `grid` in `direction`
///
/// Vertical shifts are computed on the transpose so that every line is a
/// row, then transposed back.
pub fn shift(grid: &Grid, direction: Direction) -> Shifted {
    let mut work = if direction.is_vertical() {
        transpose(grid)
    } else {
        grid.clone()
    };

    let mut merges = 0;
    for mut row in work.rows_mut() {
        let line: Vec<Cell> = row.iter().copied().collect();
        let result = collapse_toward(&line, direction.is_reversed());
        merges += result.merges;
        for (cell, value) in row.iter_mut().zip(result.cells) {
            *cell = value;
        }
    }

    let grid = if direction.is_vertical() {
        transpose(&work)
    } else {
        work
    };

    Shifted { grid, merges }
}
