//! Per-line collapse: compaction, pairwise merging and padding
//!
//! A line is one row or column of the board, viewed so that index 0 is the
//! side tiles slide towards. Board shifts are built by feeding every line
//! through [`collapse`], reversing first where the direction requires it.

use std::collections::VecDeque;

use crate::engine::tile::Tile;

/// A single board position, empty or holding one tile
pub type Cell = Option<Tile>;

/// Result of collapsing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapse {
    /// Collapsed cells, same length as the input line
    pub cells: Vec<Cell>,
    /// Number of merge events performed
    pub merges: u64,
}

impl Collapse {
    /// Whether the collapse moved or merged anything
    pub fn changed_from(&self, line: &[Cell]) -> bool {
        self.cells.as_slice() != line
    }
}

/// Collapse a line towards index 0
///
/// Empty cells are dropped, then the remaining tiles are scanned from the
/// head: an equal pair merges into one tile and both are consumed, otherwise
/// the first tile is final and the second is compared with what follows. A
/// pair whose doubled magnitude would overflow is treated as unequal.
/// The result is padded with empty cells back to the original length.
pub fn collapse(line: &[Cell]) -> Collapse {
    let mut pending: VecDeque<Tile> = line.iter().flatten().copied().collect();
    let mut cells = Vec::with_capacity(line.len());
    let mut merges = 0;

    while let Some(first) = pending.pop_front() {
        let Some(&second) = pending.front() else {
            cells.push(Some(first));
            break;
        };

        // A pair merges only when equal and the doubled magnitude fits
        let merged = if first.equals(Some(second)) {
            first.doubled()
        } else {
            None
        };

        if let Some(merged) = merged {
            pending.pop_front();
            cells.push(Some(merged));
            merges += 1;
        } else {
            cells.push(Some(first));
        }
    }

    cells.resize(line.len(), None);
    Collapse { cells, merges }
}

/// Collapse a line towards its head, or towards its tail when `reversed`
pub fn collapse_toward(line: &[Cell], reversed: bool) -> Collapse {
    if !reversed {
        return collapse(line);
    }

    let flipped: Vec<Cell> = line.iter().rev().copied().collect();
    let mut result = collapse(&flipped);
    result.cells.reverse();
    result
}
