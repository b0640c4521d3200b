use anyhow::Result;

use crate::models::{Session, SessionUpdate};

use super::store::SessionStore;

/// The application's view of "who is signed in".
///
/// Constructed once at startup and passed down to whatever needs it; there
/// is no ambient singleton. Every mutation is written through to the
/// [`SessionStore`] immediately, so a restart picks up where the user left
/// off. The context is a cache of the last known identity: it trusts its
/// callers (the auth service and profile-edit flows) and does not re-check
/// the credential collection.
pub struct SessionContext {
    store: SessionStore,
    current: Option<Session>,
}

impl SessionContext {
    /// Initializes from whatever the store has persisted.
    ///
    /// A corrupted record has already been discarded by
    /// [`SessionStore::load`], so startup is simply unauthenticated in that
    /// case.
    pub fn init(store: SessionStore) -> Self {
        let current = store.load();
        Self { store, current }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the session wholesale. `None` signs the user out.
    pub fn replace(&mut self, session: Option<Session>) -> Result<()> {
        self.current = session;
        self.persist()
    }

    /// Merges the supplied fields into the current session (profile edits).
    ///
    /// Does nothing when signed out.
    pub fn update(&mut self, update: SessionUpdate) -> Result<()> {
        if let Some(session) = self.current.as_mut() {
            session.apply(update);
            self.persist()?;
        }
        Ok(())
    }

    /// Signs the user out and removes the persisted session.
    pub fn clear(&mut self) -> Result<()> {
        self.current = None;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        match self.current {
            Some(ref session) => self.store.save(session),
            None => self.store.clear(),
        }
    }
}
