use serde::{Deserialize, Serialize};

/// A registered account as held by the credential store.
///
/// Deliberately not `Serialize`: the stored record carries the password hash
/// and must never be written to a response body. Use [`User::profile`] for
/// anything client-facing.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// The client-facing view of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Entry of the unauthenticated debug listing. Reports whether a password
/// hash is present but never the hash itself.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub has_password: bool,
}

impl From<&User> for DebugUser {
    fn from(user: &User) -> Self {
        DebugUser {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            has_password: !user.password_hash.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_password_hash() {
        let user = User {
            id: 7,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        };

        let json = serde_json::to_value(user.profile()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "testuser");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_debug_user_reports_hash_presence_only() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        };

        let json = serde_json::to_value(DebugUser::from(&user)).unwrap();
        assert_eq!(json["hasPassword"], true);
        assert!(json.get("password_hash").is_none());
    }
}
