//! Authentication module for account registration and login.
//!
//! This module provides:
//! - `CredentialStore`: load/save of the registered account collection
//! - `AuthService`: registration and login rules on top of the store
//! - `AuthError`: the user-visible failure taxonomy
//!
//! Accounts are persisted as a single JSON array behind the `Storage` seam;
//! there is no per-account addressing, callers load, mutate, and save the
//! whole collection.

pub mod credentials;
pub mod error;
pub mod service;

pub use credentials::CredentialStore;
pub use error::AuthError;
pub use service::AuthService;
