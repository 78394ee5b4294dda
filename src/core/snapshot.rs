//! History entries: independent deep copies of the restorable session state
//!
//! A snapshot carries every session field except the history stack itself;
//! the popped snapshot's history is exactly the stack after the pop, so
//! nesting the stack inside each entry would add nothing.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::challenge::Challenge;
use crate::core::pack::Pack;
use crate::types::{Boosts, Counters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board: Board,
    pub score: u32,
    pub challenge: Challenge,
    pub challenge_done: bool,
    pub boosts: Boosts,
    pub pending_pack: Option<Pack>,
    pub counters: Counters,
}
