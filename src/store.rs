//! Persistence collaborator - saving and loading the session
//!
//! The engine treats storage as an injected boundary: a `SaveStore` persists
//! the active session together with the lifetime merge total. A corrupt,
//! unparsable, or invariant-violating stored value is treated as absent - the
//! caller falls back to a fresh session and a parse failure never propagates.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::session::GameSession;

/// Everything one save holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub session: GameSession,
    pub merge_total: u64,
}

/// Borrowed view for writing without cloning the session
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveView<'a> {
    session: &'a GameSession,
    merge_total: u64,
}

/// Storage boundary for the game state
pub trait SaveStore {
    /// Load the stored state; absent, corrupt, or invalid data is `None`
    fn load(&self) -> Option<SaveData>;

    /// Persist the session and lifetime total
    fn save(&mut self, session: &GameSession, merge_total: u64) -> Result<()>;
}

fn decode(raw: &str) -> Option<SaveData> {
    let data: SaveData = serde_json::from_str(raw).ok()?;
    if !data.session.sanity_check() {
        return None;
    }
    Some(data)
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default save location next to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("dice-merge-save.json")
    }
}

impl SaveStore for FileStore {
    fn load(&self) -> Option<SaveData> {
        let raw = fs::read_to_string(&self.path).ok()?;
        decode(&raw)
    }

    fn save(&mut self, session: &GameSession, merge_total: u64) -> Result<()> {
        let text = serde_json::to_string(&SaveView {
            session,
            merge_total,
        })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// In-memory store mirroring browser local storage; used in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start from arbitrary raw bytes (e.g. a corrupt save)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Option<SaveData> {
        decode(self.raw.as_deref()?)
    }

    fn save(&mut self, session: &GameSession, merge_total: u64) -> Result<()> {
        self.raw = Some(serde_json::to_string(&SaveView {
            session,
            merge_total,
        })?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SimpleRng;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut rng = SimpleRng::new(5);
        let mut session = GameSession::new(&mut rng);
        session.ensure_pending_pack(&mut rng);

        let mut store = MemoryStore::empty();
        store.save(&session, 42).unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.session, session);
        assert_eq!(data.merge_total, 42);
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        assert!(MemoryStore::empty().load().is_none());
    }

    #[test]
    fn test_corrupt_save_is_treated_as_absent() {
        assert!(MemoryStore::with_raw("not json at all").load().is_none());
        assert!(MemoryStore::with_raw("{\"session\":{}}").load().is_none());
    }

    #[test]
    fn test_invariant_violating_save_is_treated_as_absent() {
        let mut rng = SimpleRng::new(5);
        let session = GameSession::new(&mut rng);
        let mut store = MemoryStore::empty();
        store.save(&session, 0).unwrap();

        // Smuggle an out-of-range die level into the stored board
        let tampered = store.raw().unwrap().replacen("[0,0,0,0,0]", "[9,0,0,0,0]", 1);
        assert!(MemoryStore::with_raw(tampered).load().is_none());
    }
}
