//! Pack module - the currently offered, not-yet-placed piece
//!
//! A pack is one die or an adjacent pair sharing a single level. Target cells
//! are derived from the pack shape, so placement geometry lives in one place.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::rng::UniformRng;
use crate::types::{Orientation, BOARD_SIZE, LEVEL_ONE_CUTOFF, LEVEL_TWO_CUTOFF};

/// Cells a pack occupies when anchored at some (row, col)
pub type PackCells = ArrayVec<(usize, usize), 2>;

/// The offered piece: a single die, or a pair of same-level dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Pack {
    Single { level: u8 },
    Pair { level: u8, orientation: Orientation },
}

impl Pack {
    /// Level shared by every die in the pack
    pub fn level(&self) -> u8 {
        match *self {
            Pack::Single { level } | Pack::Pair { level, .. } => level,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Pack::Pair { .. })
    }

    /// Number of dice the pack places
    pub fn die_count(&self) -> usize {
        if self.is_pair() {
            2
        } else {
            1
        }
    }

    /// Target cells when the pack is anchored at (row, col):
    /// a single occupies the anchor, a horizontal pair extends right,
    /// a vertical pair extends down. `None` if any cell leaves the board.
    pub fn target_cells(&self, row: usize, col: usize) -> Option<PackCells> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        let mut cells = PackCells::new();
        cells.push((row, col));
        match *self {
            Pack::Single { .. } => {}
            Pack::Pair {
                orientation: Orientation::Horizontal,
                ..
            } => {
                if col + 1 >= BOARD_SIZE {
                    return None;
                }
                cells.push((row, col + 1));
            }
            Pack::Pair {
                orientation: Orientation::Vertical,
                ..
            } => {
                if row + 1 >= BOARD_SIZE {
                    return None;
                }
                cells.push((row + 1, col));
            }
        }
        Some(cells)
    }
}

/// Draw a die level from the fixed weighted distribution (50/35/15)
pub fn weighted_level(rng: &mut dyn UniformRng) -> u8 {
    let r = rng.uniform() * 100.0;
    if r < LEVEL_ONE_CUTOFF {
        1
    } else if r < LEVEL_TWO_CUTOFF {
        2
    } else {
        3
    }
}

/// Generate the next pack for the given board, or `None` when the board is
/// full. The level is drawn first; a pair (with a second draw for its
/// orientation) is offered only when two adjacent cells are both free.
/// Draw order is part of the contract: one level draw, then at most one
/// orientation draw.
pub fn generate_pack(board: &Board, rng: &mut dyn UniformRng) -> Option<Pack> {
    if board.is_full() {
        return None;
    }
    let level = weighted_level(rng);
    if board.has_adjacent_free_pair() {
        let orientation = if rng.uniform() > 0.5 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Some(Pack::Pair { level, orientation })
    } else {
        Some(Pack::Single { level })
    }
}
