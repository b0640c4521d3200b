use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::models::Account;
use crate::storage::Storage;

/// Storage key for the account collection
const ACCOUNTS_KEY: &str = "accounts";

/// Loads and saves the registered account collection.
///
/// The collection is read-modify-write: the whole array is (de)serialized on
/// every operation. Passwords pass through unmodified; isolating them behind
/// this type is what would let a hashing scheme land here without touching
/// the service.
pub struct CredentialStore {
    storage: Arc<dyn Storage>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns the persisted collection.
    ///
    /// Never fails: an absent, unreadable, or unparseable payload degrades
    /// to the empty collection. Corruption is logged and otherwise ignored.
    pub fn load(&self) -> Vec<Account> {
        let raw = match self.storage.get(ACCOUNTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read stored accounts: {:#}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!("Failed to parse stored accounts: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrites the persisted collection.
    pub fn save(&self, accounts: &[Account]) -> Result<()> {
        let raw = serde_json::to_string(accounts)?;
        self.storage.set(ACCOUNTS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn account(email: &str) -> Account {
        Account {
            name: "Test".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_load_empty_store() {
        let store = CredentialStore::new(Arc::new(MemoryStorage::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = CredentialStore::new(Arc::new(MemoryStorage::new()));
        let accounts = vec![account("a@example.com"), account("b@example.com")];
        store.save(&accounts).unwrap();
        assert_eq!(store.load(), accounts);
    }

    #[test]
    fn test_password_stored_verbatim() {
        let storage = Arc::new(MemoryStorage::new());
        let store = CredentialStore::new(storage.clone());
        let mut acct = account("a@example.com");
        acct.password = "S3cret! with spaces".to_string();
        store.save(&[acct]).unwrap();
        let raw = storage.get("accounts").unwrap().unwrap();
        assert!(raw.contains("S3cret! with spaces"));
        assert_eq!(store.load()[0].password, "S3cret! with spaces");
    }

    #[test]
    fn test_corrupted_payload_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("accounts", "not json at all").unwrap();
        let store = CredentialStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("accounts", r#"{"name":"not an array"}"#).unwrap();
        let store = CredentialStore::new(storage);
        assert!(store.load().is_empty());
    }
}
