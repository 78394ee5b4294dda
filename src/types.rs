//! Core types shared across the application
//! This module contains pure data types with no dependencies beyond serde

use serde::{Deserialize, Serialize};

/// Board dimensions (square grid)
pub const BOARD_SIZE: usize = 5;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Die levels: 0 is an empty cell, 1..=6 are dice
pub const MAX_LEVEL: u8 = 6;

/// Level-5 clusters clear instead of promoting
pub const TOP_MERGE_LEVEL: u8 = 5;

/// Minimum cluster size that qualifies for a merge
pub const MIN_CLUSTER: usize = 3;

/// Weighted level distribution for generated packs, in percent:
/// draws below `LEVEL_ONE_CUTOFF` yield level 1, below `LEVEL_TWO_CUTOFF`
/// level 2, the rest level 3 (P = 50/35/15)
pub const LEVEL_ONE_CUTOFF: f64 = 50.0;
pub const LEVEL_TWO_CUTOFF: f64 = 85.0;

/// One-time score bonus for completing the session challenge
pub const CHALLENGE_BONUS: u32 = 10;

/// Number of check marks a challenge can earn
pub const CHALLENGE_CHECKS: u8 = 3;

/// A board coordinate as (row, col)
pub type Coord = (usize, usize);

/// Orientation of a pair pack on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Result of attempting to use a boost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostOutcome {
    /// Charge consumed and the effect applied (for the hammer: armed).
    Applied,
    /// No charges left; the caller presents the purchase flow instead.
    Unavailable,
    /// Preconditions not met; nothing changed and no charge was spent.
    Ignored,
}

/// Remaining boost charges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boosts {
    pub undo: u32,
    pub clear_level: u32,
    pub hammer: u32,
}

impl Boosts {
    /// Charges a fresh session starts with
    pub fn initial() -> Self {
        Self {
            undo: 2,
            clear_level: 1,
            hammer: 1,
        }
    }
}

impl Default for Boosts {
    fn default() -> Self {
        Self::initial()
    }
}

/// Session-scoped event counters; monotonic, and the sole feed for
/// challenge progress (together with the session score)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// Successful pack placements
    pub placements: u32,
    /// Placements of pair packs
    pub pair_placements: u32,
    /// Dice removed from the board, lifetime of the session
    pub removed: u32,
    /// Merges that produced a level-3 die
    pub merged_to3: u32,
    /// Merges of any kind
    pub merged_any: u32,
    /// Level-5 clusters cleared off the board
    pub level5_cleared: u32,
    /// Merges that produced a level-6 die
    pub level6_created: u32,
    /// Boost charges spent
    pub boosts_used: u32,
    /// Placements that triggered a cascade of two or more merge rounds
    pub chain2: u32,
}
