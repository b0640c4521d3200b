use thiserror::Error;

/// Failures surfaced by [`AuthService`](super::AuthService).
///
/// Every variant is recoverable at the call site by user retry; none is
/// fatal. `AccountNotFound` and `InvalidPassword` are distinct kinds here;
/// whether the UI presents them as one "bad credentials" message is the
/// caller's choice.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    DuplicateAccount,

    #[error("No account found for this email")]
    AccountNotFound,

    #[error("Incorrect password")]
    InvalidPassword,

    /// The backing store rejected a write.
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
