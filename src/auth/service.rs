use tracing::debug;

use crate::models::{Account, Session};

use super::credentials::CredentialStore;
use super::error::AuthError;

/// Trim and lowercase an email for use as the account uniqueness key.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registration and login rules on top of [`CredentialStore`].
///
/// The methods are async to match the calling convention of a future
/// networked backend; today they complete synchronously against local
/// storage.
pub struct AuthService {
    credentials: CredentialStore,
}

impl AuthService {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }

    /// Registers a new account and returns its session projection.
    ///
    /// Fails with [`AuthError::DuplicateAccount`] if an account already
    /// exists under the same normalized email.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let mut accounts = self.credentials.load();
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::DuplicateAccount);
        }

        let account = Account {
            name: name.trim().to_string(),
            email,
            password: password.to_string(),
            avatar: None,
        };
        let session = account.to_session();
        accounts.push(account);
        self.credentials.save(&accounts)?;

        debug!("Registered account for {}", session.email);
        Ok(session)
    }

    /// Logs in against a stored account and returns its session projection.
    ///
    /// Fails with [`AuthError::AccountNotFound`] when no account matches the
    /// normalized email, and [`AuthError::InvalidPassword`] when the stored
    /// password is not byte-for-byte equal to the supplied one. No side
    /// effects either way.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let accounts = self.credentials.load();
        let account = accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or(AuthError::AccountNotFound)?;
        if account.password != password {
            return Err(AuthError::InvalidPassword);
        }
        Ok(account.to_session())
    }
}
