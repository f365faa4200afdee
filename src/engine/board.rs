//! Board state: the tile grid, score accumulation, spawning and move detection

use std::fmt;

use log::debug;
use ndarray::Array2;
use rand::Rng;

use crate::engine::direction::Direction;
use crate::engine::grid::{self, Grid};
use crate::engine::tile::Tile;
use crate::io::configuration::{MAX_DIMENSION, SPAWN_MAGNITUDE};
use crate::io::error::{Result, invalid_parameter};

/// Result of simulating a shift without applying it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    /// Whether any cell would change
    pub changed: bool,
    /// Merge events the shift would perform
    pub merges: u64,
}

/// An N×N puzzle board
///
/// Owns its grid exclusively; every mutation goes through [`Board::shift`] or
/// [`Board::spawn_tile`]. The score grows by one per merge event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    cells: Grid,
    score: u64,
}

impl Board {
    /// Create an empty board of the given side length
    ///
    /// # Errors
    ///
    /// Returns an error if `dimension` is zero or exceeds [`MAX_DIMENSION`]
    pub fn new(dimension: usize) -> Result<Self> {
        validate_dimension(dimension)?;
        Ok(Self {
            dimension,
            cells: grid::empty_grid(dimension),
            score: 0,
        })
    }

    /// Build a board from rows of magnitudes, where 0 marks an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a valid square or a
    /// non-zero value is not a tile magnitude
    pub fn from_rows(rows: &[Vec<u64>]) -> Result<Self> {
        let dimension = rows.len();
        validate_dimension(dimension)?;

        let mut values = Vec::with_capacity(dimension * dimension);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(invalid_parameter(
                    "rows",
                    &format!("row {index} has {} cells", row.len()),
                    &format!("every row must have {dimension} cells"),
                ));
            }
            for &value in row {
                if value == 1 || (value != 0 && !value.is_power_of_two()) {
                    return Err(invalid_parameter(
                        "rows",
                        &value,
                        &"tile magnitudes must be powers of two from 2 upwards",
                    ));
                }
                values.push((value != 0).then_some(Tile::new(value)));
            }
        }

        let cells = Array2::from_shape_vec((dimension, dimension), values)
            .map_err(|e| invalid_parameter("rows", &dimension, &e))?;

        Ok(Self {
            dimension,
            cells,
            score: 0,
        })
    }

    /// Side length of the board
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Merge events accumulated so far
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Read-only view of the grid
    pub const fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Tile at `(row, col)`, or `None` when empty or out of bounds
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Number of cells holding a tile
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Largest tile on the board
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().max().copied()
    }

    /// Whether at least one cell is empty
    pub fn has_free_cell(&self) -> bool {
        grid::has_free_cell(&self.cells)
    }

    /// Coordinates of the empty cells in column-major order
    pub fn free_cell_coordinates(&self) -> Vec<(usize, usize)> {
        grid::free_cells(&self.cells)
    }

    /// Place a new tile on a uniformly chosen empty cell
    ///
    /// Returns the chosen position, or `None` without touching the board when
    /// it is full.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        let free = self.free_cell_coordinates();
        if free.is_empty() {
            return None;
        }

        let position = *free.get(rng.random_range(0..free.len()))?;
        let cell = self.cells.get_mut(position)?;
        *cell = Some(Tile::new(SPAWN_MAGNITUDE));
        debug!("spawned {SPAWN_MAGNITUDE} at {position:?}");
        Some(position)
    }

    /// Simulate a shift on a copy of the grid
    pub fn preview(&self, direction: Direction) -> Preview {
        let shifted = grid::shift(&self.cells, direction);
        Preview {
            changed: shifted.grid != self.cells,
            merges: shifted.merges,
        }
    }

    /// Shift every tile in `direction`, returning whether the grid changed
    pub fn shift(&mut self, direction: Direction) -> bool {
        let shifted = grid::shift(&self.cells, direction);
        let changed = shifted.grid != self.cells;
        self.cells = shifted.grid;
        self.score += shifted.merges;
        changed
    }

    /// Whether any of the four shifts would change the grid
    ///
    /// Simulations run on copies and leave the score untouched.
    pub fn has_moves(&self) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.preview(direction).changed)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .max_tile()
            .map_or(1, |tile| tile.magnitude().to_string().len());

        for row in self.cells.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(tile) => format!("{:>width$}", tile.magnitude()),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn validate_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(invalid_parameter(
            "dimension",
            &dimension,
            &"board must have at least one cell",
        ));
    }
    if dimension > MAX_DIMENSION {
        return Err(invalid_parameter(
            "dimension",
            &dimension,
            &format!("must not exceed {MAX_DIMENSION}"),
        ));
    }
    Ok(())
}
