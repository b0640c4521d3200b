use serde::{Deserialize, Serialize};

/// The current user's public identity: "who is using the app".
///
/// Derived from an [`Account`](super::Account) on login or registration;
/// never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Partial update applied to an existing session by profile edits.
///
/// Absent fields keep their current value; there is no way to unset the
/// avatar through an update, only to replace it.
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl Session {
    /// Merges the supplied fields into this session.
    pub fn apply(&mut self, update: SessionUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut session = sample();
        session.apply(SessionUpdate {
            name: Some("Sarah J.".to_string()),
            ..Default::default()
        });
        assert_eq!(session.name, "Sarah J.");
        assert_eq!(session.email, "sarah@example.com");
    }

    #[test]
    fn test_apply_sets_avatar() {
        let mut session = sample();
        session.apply(SessionUpdate {
            avatar: Some("avatar-3".to_string()),
            ..Default::default()
        });
        assert_eq!(session.avatar.as_deref(), Some("avatar-3"));
        // A later update without an avatar leaves it alone
        session.apply(SessionUpdate {
            name: Some("Sarah".to_string()),
            ..Default::default()
        });
        assert_eq!(session.avatar.as_deref(), Some("avatar-3"));
    }
}
