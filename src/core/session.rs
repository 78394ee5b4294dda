//! Game session - owns the board, score, challenge, boosts, and history
//!
//! Every public operation is total: expected misuse (placing into an occupied
//! cell, rotating a single, using a spent boost) is a no-op or an explicit
//! result value, never a panic. Board-mutating operations push a snapshot
//! first, so each one is atomic against the session.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::challenge::{self, Challenge};
use crate::core::merge;
use crate::core::pack::{self, Pack};
use crate::core::rng::UniformRng;
use crate::core::snapshot::Snapshot;
use crate::types::{BoostOutcome, Boosts, Counters, CHALLENGE_BONUS, CHALLENGE_CHECKS, MAX_LEVEL};

/// Outcome of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceReport {
    /// Individual merges the placement triggered
    pub merges: u32,
    /// Cascade rounds (chain length)
    pub rounds: u32,
    /// True when the placement left the board with no free cell
    pub ended: bool,
}

/// Complete state of one puzzle session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    board: Board,
    score: u32,
    challenge: Challenge,
    challenge_done: bool,
    boosts: Boosts,
    history: Vec<Snapshot>,
    pending_pack: Option<Pack>,
    counters: Counters,
    /// Transient hammer selection mode; never persisted or snapshotted
    #[serde(skip)]
    hammer_armed: bool,
}

impl GameSession {
    /// Create a fresh session; the challenge is drawn through the RNG
    pub fn new(rng: &mut dyn UniformRng) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            challenge: challenge::draw(rng),
            challenge_done: false,
            boosts: Boosts::initial(),
            history: Vec::new(),
            pending_pack: None,
            counters: Counters::default(),
            hammer_armed: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn challenge_done(&self) -> bool {
        self.challenge_done
    }

    pub fn boosts(&self) -> Boosts {
        self.boosts
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn pending_pack(&self) -> Option<Pack> {
        self.pending_pack
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn hammer_armed(&self) -> bool {
        self.hammer_armed
    }

    /// Terminal when zero free cells remain
    pub fn is_over(&self) -> bool {
        self.board.is_full()
    }

    /// Offer a pack if none is pending and the board has room. Idempotent;
    /// consumes no RNG draw when the preconditions are unmet.
    pub fn ensure_pending_pack(&mut self, rng: &mut dyn UniformRng) {
        if self.pending_pack.is_some() {
            return;
        }
        self.pending_pack = pack::generate_pack(&self.board, rng);
    }

    /// Flip a pending pair's orientation. No-op (false) for singles or when
    /// no pack is pending; costs nothing and is not recorded in history.
    pub fn rotate_base(&mut self) -> bool {
        match &mut self.pending_pack {
            Some(Pack::Pair { orientation, .. }) => {
                *orientation = orientation.flipped();
                true
            }
            _ => false,
        }
    }

    /// Place the pending pack anchored at (row, col).
    ///
    /// Returns `None` without touching anything when no pack is pending, the
    /// shape leaves the board, or a target cell is occupied. On success the
    /// pack's dice are written, merges cascade, and challenge progress is
    /// re-registered; the report says whether the board ended full.
    pub fn place_pack_at(&mut self, row: usize, col: usize) -> Option<PlaceReport> {
        let pack = self.pending_pack?;
        let cells = pack.target_cells(row, col)?;
        if cells.iter().any(|&(r, c)| !self.board.is_free(r, c)) {
            return None;
        }

        self.push_history();
        for &(r, c) in &cells {
            self.board.set(r, c, pack.level());
        }
        self.counters.placements += 1;
        if pack.is_pair() {
            self.counters.pair_placements += 1;
        }
        self.pending_pack = None;

        let merged = merge::resolve_merges(&mut self.board, &mut self.counters);
        self.score += merged.merges;
        self.refresh_challenge();

        Some(PlaceReport {
            merges: merged.merges,
            rounds: merged.rounds,
            ended: self.board.is_full(),
        })
    }

    /// Undo the most recent board-mutating action.
    ///
    /// `Unavailable` without a charge, `Ignored` when there is nothing to
    /// undo (the charge is kept). Otherwise the popped snapshot replaces the
    /// session wholesale - board, score, counters, pending pack - except the
    /// boost counts, which keep their current values minus the undo charge:
    /// an undo cannot be undone.
    pub fn use_undo(&mut self) -> BoostOutcome {
        if self.boosts.undo == 0 {
            return BoostOutcome::Unavailable;
        }
        let Some(snapshot) = self.history.pop() else {
            return BoostOutcome::Ignored;
        };

        let mut kept = self.boosts;
        kept.undo -= 1;
        self.restore(snapshot);
        self.boosts = kept;
        self.refresh_challenge();
        BoostOutcome::Applied
    }

    /// Clear every die of the given level.
    ///
    /// `Unavailable` without a charge; `Ignored` for a level outside 1..=6 or
    /// an empty board. The charge is consumed even when no die matches.
    pub fn use_clear_level(&mut self, level: u8) -> BoostOutcome {
        if self.boosts.clear_level == 0 {
            return BoostOutcome::Unavailable;
        }
        if level < 1 || level > MAX_LEVEL {
            return BoostOutcome::Ignored;
        }
        if !self.board.has_dice() {
            return BoostOutcome::Ignored;
        }

        self.push_history();
        self.boosts.clear_level -= 1;
        self.counters.boosts_used += 1;
        let removed = self.board.clear_matching(level);
        self.counters.removed += removed;
        self.refresh_challenge();
        BoostOutcome::Applied
    }

    /// Enter the hammer's single-cell selection mode.
    /// The charge is consumed by the strike, not by arming.
    pub fn arm_hammer(&mut self) -> BoostOutcome {
        if self.boosts.hammer == 0 {
            return BoostOutcome::Unavailable;
        }
        self.hammer_armed = true;
        BoostOutcome::Applied
    }

    /// Remove the die at (row, col) while the hammer is armed.
    ///
    /// Selecting an empty or out-of-range cell is a no-op that keeps the
    /// selection mode active; a hit consumes the charge and exits the mode.
    pub fn hammer_strike(&mut self, row: usize, col: usize) -> bool {
        if !self.hammer_armed {
            return false;
        }
        if !self.board.is_occupied(row, col) {
            return false;
        }

        self.push_history();
        self.boosts.hammer -= 1;
        self.counters.boosts_used += 1;
        self.board.set(row, col, 0);
        self.counters.removed += 1;
        self.hammer_armed = false;
        self.refresh_challenge();
        true
    }

    /// Leave the hammer selection mode without side effects
    pub fn cancel_hammer(&mut self) {
        self.hammer_armed = false;
    }

    /// Check the reachable-state invariants; used to reject parsed-but-bogus
    /// saved sessions
    pub fn sanity_check(&self) -> bool {
        self.board.is_valid_grid()
            && self.challenge.checks <= CHALLENGE_CHECKS
            && self.challenge.progress <= self.challenge.target
            && self.history.iter().all(|s| s.board.is_valid_grid())
    }

    fn push_history(&mut self) {
        let snapshot = Snapshot {
            board: self.board.clone(),
            score: self.score,
            challenge: self.challenge,
            challenge_done: self.challenge_done,
            boosts: self.boosts,
            pending_pack: self.pending_pack,
            counters: self.counters,
        };
        self.history.push(snapshot);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.score = snapshot.score;
        self.challenge = snapshot.challenge;
        self.challenge_done = snapshot.challenge_done;
        self.boosts = snapshot.boosts;
        self.pending_pack = snapshot.pending_pack;
        self.counters = snapshot.counters;
    }

    fn refresh_challenge(&mut self) {
        let completed = challenge::register_progress(&mut self.challenge, &self.counters, self.score);
        if completed && !self.challenge_done {
            self.score += CHALLENGE_BONUS;
            self.challenge_done = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_pending_pack(&mut self, pack: Option<Pack>) {
        self.pending_pack = pack;
    }

    #[cfg(test)]
    pub(crate) fn set_challenge(&mut self, challenge: Challenge) {
        self.challenge = challenge;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
