pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::UserProfile;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Payload of a login request. The `username` field accepts a username or an
/// email address. Fields are `Option` so absence is reported as
/// `MissingField` rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns the two credentials, treating absent and empty fields alike.
    pub fn fields(&self) -> Result<(&str, &str), AppError> {
        match (present(&self.username), present(&self.password)) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(AppError::MissingField(
                "Username and password are required".into(),
            )),
        }
    }
}

/// Payload of a registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn fields(&self) -> Result<(&str, &str, &str), AppError> {
        match (
            present(&self.username),
            present(&self.email),
            present(&self.password),
        ) {
            (Some(username), Some(email), Some(password)) => Ok((username, email, password)),
            _ => Err(AppError::MissingField(
                "Username, email and password are required".into(),
            )),
        }
    }
}

/// A field counts as supplied only when it is present and non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Data payload returned by successful registration and login: the session
/// token plus the public profile of the authenticated user.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_presence_check() {
        let complete: RegisterRequest = serde_json::from_str(
            r#"{"username": "alice", "email": "alice@x.com", "password": "pw1"}"#,
        )
        .unwrap();
        assert!(complete.fields().is_ok());

        let missing_email: RegisterRequest =
            serde_json::from_str(r#"{"username": "alice", "password": "pw1"}"#).unwrap();
        assert!(matches!(
            missing_email.fields(),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_login_request_presence_check() {
        let complete: LoginRequest =
            serde_json::from_str(r#"{"username": "alice", "password": "pw1"}"#).unwrap();
        assert!(complete.fields().is_ok());

        let missing_password: LoginRequest =
            serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert!(matches!(
            missing_password.fields(),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_empty_fields_count_as_missing() {
        let empty_password: LoginRequest =
            serde_json::from_str(r#"{"username": "alice", "password": ""}"#).unwrap();
        assert!(matches!(
            empty_password.fields(),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        // Clients may send more than the contract requires; only the known
        // fields count.
        let request: RegisterRequest = serde_json::from_str(
            r#"{"username": "a", "email": "a@x.com", "password": "p", "role": "admin"}"#,
        )
        .unwrap();
        assert!(request.fields().is_ok());
    }
}
