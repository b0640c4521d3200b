use serde::{Deserialize, Serialize};

use super::session::Session;

/// A registered account as stored in the credential collection.
///
/// Accounts are created at registration and never modified afterwards. The
/// `email` field is the uniqueness key and is always normalized (trimmed,
/// lowercased) before it gets here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    /// Stored verbatim, exactly as supplied at registration.
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Account {
    /// The public projection of this account, safe to hand to the view layer.
    pub fn to_session(&self) -> Session {
        Session {
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_session_excludes_password() {
        let account = Account {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            password: "secret1".to_string(),
            avatar: None,
        };
        let session = account.to_session();
        assert_eq!(session.name, "Sarah Johnson");
        assert_eq!(session.email, "sarah@example.com");
        assert_eq!(session.avatar, None);
    }

    #[test]
    fn test_avatar_omitted_from_json_when_absent() {
        let account = Account {
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            password: "p".to_string(),
            avatar: None,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("avatar"));
    }
}
