//! Core library for the ICT Girls app.
//!
//! This crate implements the part of the app that survives a restart:
//!
//! - `auth`: account registration and login over a stored account collection
//! - `session`: the current user's identity, persisted across restarts
//! - `storage`: the key-value persistence seam with memory, file, and
//!   OS-keychain backends
//! - `config`: application configuration (data location, last login email)
//!
//! The view layer lives in the application shell and talks to this crate
//! through [`AuthService`] and [`SessionContext`].

pub mod auth;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;

pub use auth::{AuthError, AuthService, CredentialStore};
pub use config::Config;
pub use models::{Account, Session, SessionUpdate};
pub use session::{SessionContext, SessionStore};
pub use storage::{FileStorage, KeyringStorage, MemoryStorage, Storage};
