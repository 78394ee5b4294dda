//! Challenge module - the per-session side objective
//!
//! One challenge is drawn per session from a fixed template table. Progress is
//! recomputed from the session counters (never decremented), check marks
//! advance as progress crosses thirds of the target, and completing all three
//! checks pays a one-time score bonus handled by the session.

use serde::{Deserialize, Serialize};

use crate::core::rng::UniformRng;
use crate::types::{Counters, CHALLENGE_CHECKS};

/// Challenge identity; the serialized names double as the save-format keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeKey {
    MergeLevel3,
    MergeAny5,
    ClearLevel5,
    CreateLevel6,
    Place10,
    UseBoost,
    Chain2,
    SpawnPair3,
    Remove10,
    Score8,
}

impl ChallengeKey {
    /// Player-facing goal text
    pub fn describe(self) -> &'static str {
        match self {
            ChallengeKey::MergeLevel3 => "Merge up to level 3 three times",
            ChallengeKey::MergeAny5 => "Perform 5 merges of any kind",
            ChallengeKey::ClearLevel5 => "Clear at least one trio of 5s",
            ChallengeKey::CreateLevel6 => "Create a level 6 die",
            ChallengeKey::Place10 => "Place 10 packs",
            ChallengeKey::UseBoost => "Use 1 boost",
            ChallengeKey::Chain2 => "Trigger a chain of 2 merges",
            ChallengeKey::SpawnPair3 => "Place 3 pair packs",
            ChallengeKey::Remove10 => "Remove 10 dice in total",
            ChallengeKey::Score8 => "Score 8 points in one session",
        }
    }

    /// The counter this challenge tracks
    fn source_value(self, counters: &Counters, score: u32) -> u32 {
        match self {
            ChallengeKey::MergeLevel3 => counters.merged_to3,
            ChallengeKey::MergeAny5 => counters.merged_any,
            ChallengeKey::ClearLevel5 => counters.level5_cleared,
            ChallengeKey::CreateLevel6 => counters.level6_created,
            ChallengeKey::Place10 => counters.placements,
            ChallengeKey::UseBoost => counters.boosts_used,
            ChallengeKey::Chain2 => counters.chain2,
            ChallengeKey::SpawnPair3 => counters.pair_placements,
            ChallengeKey::Remove10 => counters.removed,
            ChallengeKey::Score8 => score,
        }
    }
}

/// The template set a session draws from: (key, target)
pub const TEMPLATES: [(ChallengeKey, u32); 10] = [
    (ChallengeKey::MergeLevel3, 3),
    (ChallengeKey::MergeAny5, 5),
    (ChallengeKey::ClearLevel5, 1),
    (ChallengeKey::CreateLevel6, 1),
    (ChallengeKey::Place10, 10),
    (ChallengeKey::UseBoost, 1),
    (ChallengeKey::Chain2, 1),
    (ChallengeKey::SpawnPair3, 3),
    (ChallengeKey::Remove10, 10),
    (ChallengeKey::Score8, 8),
];

/// The active challenge and its progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub key: ChallengeKey,
    pub target: u32,
    pub progress: u32,
    pub checks: u8,
}

/// Draw a challenge uniformly from the template table
pub fn draw(rng: &mut dyn UniformRng) -> Challenge {
    let index = ((rng.uniform() * TEMPLATES.len() as f64) as usize).min(TEMPLATES.len() - 1);
    let (key, target) = TEMPLATES[index];
    Challenge {
        key,
        target,
        progress: 0,
        checks: 0,
    }
}

/// Recompute progress from the counters and advance check marks.
///
/// Checks advance while `progress >= target * (checks + 1) / 3`, compared
/// exactly (in integers: `3 * progress >= target * (checks + 1)`), capped at
/// three. Returns true when all checks are earned; the caller owns the
/// one-shot completion bonus.
pub fn register_progress(challenge: &mut Challenge, counters: &Counters, score: u32) -> bool {
    let value = challenge.key.source_value(counters, score);
    challenge.progress = value.min(challenge.target);
    while challenge.checks < CHALLENGE_CHECKS
        && 3 * challenge.progress >= challenge.target * u32::from(challenge.checks + 1)
    {
        challenge.checks += 1;
    }
    challenge.checks == CHALLENGE_CHECKS
}
