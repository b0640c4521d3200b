use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::models::Session;
use crate::storage::Storage;

/// Storage key for the current session
const SESSION_KEY: &str = "session";

/// Persists the current user's public identity.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Loads the persisted session, if any.
    ///
    /// A payload that fails to parse is removed so the next start is clean,
    /// and reads as an absent session.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read stored session: {:#}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Failed to parse stored session, discarding: {}", e);
                if let Err(e) = self.storage.remove(SESSION_KEY) {
                    warn!("Failed to remove corrupted session: {:#}", e);
                }
                None
            }
        }
    }

    /// Saves the session, replacing whatever was persisted before.
    pub fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &raw)
    }

    /// Removes the persisted session entirely.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(SESSION_KEY)
    }
}
