//! Core module - pure game logic with no I/O dependencies
//!
//! Everything in here is deterministic under an injected [`rng::UniformRng`]
//! and operates on plain values; persistence and presentation live outside.

pub mod board;
pub mod challenge;
pub mod merge;
pub mod pack;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use challenge::{Challenge, ChallengeKey};
pub use merge::{find_cluster, is_merge_free, resolve_merges, MergeReport};
pub use pack::{generate_pack, Pack};
pub use rng::{SequenceRng, SimpleRng, UniformRng};
pub use session::{GameSession, PlaceReport};
pub use snapshot::Snapshot;
