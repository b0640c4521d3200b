use anyhow::{Context, Result};
use keyring::Entry;

use super::Storage;

/// Service name under which entries are filed in the OS keychain
const SERVICE_NAME: &str = "ictgirls";

/// OS keychain storage backend.
///
/// Keeps each key as a keychain entry under the application service name, so
/// stored account data never sits in a world-readable file. Matches the
/// contract of the other backends: absent entries read as `None` and removing
/// an absent entry succeeds.
#[derive(Debug, Default)]
pub struct KeyringStorage;

impl KeyringStorage {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry> {
        Entry::new(SERVICE_NAME, key).context("Failed to create keyring entry")
    }
}

impl Storage for KeyringStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match Self::entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read from keychain"),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::entry(key)?
            .set_password(value)
            .context("Failed to write to keychain")
    }

    fn remove(&self, key: &str) -> Result<()> {
        match Self::entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete keychain entry"),
        }
    }
}
