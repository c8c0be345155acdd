use crate::error::AppError;
use crate::models::User;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens are valid for 24 hours from issuance.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: i32,
    pub username: String,
    pub email: String,
    /// Expiration timestamp, seconds since epoch.
    pub exp: u64,
    /// Issuance timestamp, seconds since epoch.
    pub iat: u64,
}

/// Signs a token binding the user's id, username and email, expiring in 24
/// hours. The signing secret comes from the process configuration.
pub fn generate_token(user: &User, secret: &str) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp");

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        exp: expiration.timestamp() as u64,
        iat: now.timestamp() as u64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("failed to sign token: {}", e)))
}

/// Verifies signature and expiry and returns the decoded claims. Malformed,
/// foreign-signed and expired tokens all come back as `InvalidToken`.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
