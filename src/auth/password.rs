use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::Internal(format!("failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "admin123";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn test_verify_with_invalid_hash() {
        match verify_password("admin123", "invalidhashformat") {
            Err(AppError::Internal(msg)) => {
                assert!(msg.contains("failed to verify password"));
            }
            Ok(false) => {
                // bcrypt may also report a malformed hash as a plain
                // verification failure.
            }
            Ok(true) => panic!("verification must not succeed for a malformed hash"),
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }
}
