//! Top-level game value - the explicitly owned replacement for globals
//!
//! `Game` owns the active session, the lifetime merge total, and the save
//! store, and persists after every mutating operation. Banking is
//! transition-driven: only the mutation that fills the board banks the score,
//! so a reloaded full-board save can never bank twice.

use anyhow::Result;

use crate::core::rng::UniformRng;
use crate::core::session::{GameSession, PlaceReport};
use crate::store::SaveStore;
use crate::types::BoostOutcome;

/// Events a mutating operation can raise for the caller to present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The board filled up; the score has been banked
    SessionEnded { final_score: u32, merge_total: u64 },
}

/// The active session plus everything that outlives it
#[derive(Debug)]
pub struct Game<S: SaveStore> {
    session: GameSession,
    merge_total: u64,
    over: bool,
    store: S,
}

impl<S: SaveStore> Game<S> {
    /// Resume from the store, or start fresh when nothing (usable) is saved
    pub fn load_or_new(store: S, rng: &mut dyn UniformRng) -> Self {
        let (session, merge_total) = match store.load() {
            Some(data) => (data.session, data.merge_total),
            None => (GameSession::new(rng), 0),
        };
        let over = session.is_over();
        Self {
            session,
            merge_total,
            over,
            store,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn merge_total(&self) -> u64 {
        self.merge_total
    }

    /// True once the current session has ended; only `start_new_session`
    /// (or `finish_and_bank`) proceeds from here
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn ensure_pending_pack(&mut self, rng: &mut dyn UniformRng) -> Result<()> {
        if self.over || self.session.pending_pack().is_some() {
            return Ok(());
        }
        self.session.ensure_pending_pack(rng);
        self.persist()
    }

    /// Place the pending pack; a placement that fills the board banks the
    /// score and reports the session end
    pub fn place_pack_at(&mut self, row: usize, col: usize) -> Result<Option<GameEvent>> {
        if self.over {
            return Ok(None);
        }
        let Some(report) = self.session.place_pack_at(row, col) else {
            return Ok(None);
        };
        let event = self.settle(report);
        self.persist()?;
        Ok(event)
    }

    pub fn rotate_base(&mut self) -> Result<bool> {
        if self.over || !self.session.rotate_base() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn use_undo(&mut self) -> Result<BoostOutcome> {
        if self.over {
            return Ok(BoostOutcome::Ignored);
        }
        let outcome = self.session.use_undo();
        if outcome == BoostOutcome::Applied {
            self.persist()?;
        }
        Ok(outcome)
    }

    pub fn use_clear_level(&mut self, level: u8) -> Result<BoostOutcome> {
        if self.over {
            return Ok(BoostOutcome::Ignored);
        }
        let outcome = self.session.use_clear_level(level);
        if outcome == BoostOutcome::Applied {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Arming is transient and not persisted
    pub fn arm_hammer(&mut self) -> BoostOutcome {
        if self.over {
            return BoostOutcome::Ignored;
        }
        self.session.arm_hammer()
    }

    pub fn hammer_strike(&mut self, row: usize, col: usize) -> Result<bool> {
        if self.over {
            return Ok(false);
        }
        let hit = self.session.hammer_strike(row, col);
        if hit {
            self.persist()?;
        }
        Ok(hit)
    }

    pub fn cancel_hammer(&mut self) {
        self.session.cancel_hammer();
    }

    /// The exit flow: bank the current score and reset to a fresh session.
    /// Returns the new lifetime total. An already-ended session banked at the
    /// moment the board filled, so only a live score is banked here.
    pub fn finish_and_bank(&mut self, rng: &mut dyn UniformRng) -> Result<u64> {
        if !self.over {
            self.merge_total += u64::from(self.session.score());
        }
        self.start_new_session(rng)?;
        Ok(self.merge_total)
    }

    /// Reset to a fresh session, keeping the lifetime total
    pub fn start_new_session(&mut self, rng: &mut dyn UniformRng) -> Result<()> {
        self.session = GameSession::new(rng);
        self.over = false;
        self.persist()
    }

    fn settle(&mut self, report: PlaceReport) -> Option<GameEvent> {
        if !report.ended {
            return None;
        }
        self.over = true;
        self.merge_total += u64::from(self.session.score());
        Some(GameEvent::SessionEnded {
            final_score: self.session.score(),
            merge_total: self.merge_total,
        })
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.session, self.merge_total)
    }
}
