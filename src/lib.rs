//! Dice-merge board puzzle.
//!
//! Dice packs are placed onto a 5x5 grid; same-valued dice forming a
//! 4-connected cluster of three or more merge into one die of the next level,
//! and merges cascade. A per-session challenge tracks a random side goal, and
//! limited-use boosts (undo, clear-by-level, hammer) mutate the board through
//! a snapshot history.
//!
//! # Module Structure
//!
//! - [`core`]: the board simulation engine - pure, deterministic under an
//!   injected RNG, and the unit of persistence
//! - [`game`]: the owned top-level state (active session, lifetime merge
//!   total, save store)
//! - [`store`]: the persistence collaborator (JSON file or in-memory)
//! - [`term`]: the presentation collaborator (pure text view)
//! - [`types`]: shared constants and small value types
//!
//! # Example
//!
//! ```
//! use dice_merge::core::{GameSession, SimpleRng};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut session = GameSession::new(&mut rng);
//!
//! // Offer a pack and place it in the top-left corner
//! session.ensure_pending_pack(&mut rng);
//! let pack = session.pending_pack().expect("empty board always offers a pack");
//! assert!(session.place_pack_at(0, 0).is_some());
//! assert_eq!(session.counters().placements, 1);
//! assert_eq!(session.pending_pack(), None);
//! # let _ = pack;
//! ```

pub mod core;
pub mod game;
pub mod store;
pub mod term;
pub mod types;
