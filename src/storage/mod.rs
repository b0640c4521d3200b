//! Key-value persistence seam.
//!
//! This module provides:
//! - `Storage`: the string-keyed get/set/remove contract everything persists
//!   through
//! - `MemoryStorage`: in-memory map, used by tests
//! - `FileStorage`: one JSON file per key under a data directory
//! - `KeyringStorage`: OS keychain entries via the keyring crate
//!
//! The credential collection and the current session live under two
//! independent keys and are never updated together.

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileStorage;
pub use keychain::KeyringStorage;
pub use memory::MemoryStorage;

use anyhow::Result;

/// String-keyed persistence used by the credential and session stores.
///
/// Values are serialized JSON; the trait does not interpret them.
pub trait Storage: Send + Sync {
    /// Returns the stored value, or `None` if the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
