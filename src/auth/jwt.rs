//! JWT session-token creation and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::types::Claims;

/// Session tokens expire one hour after issuance.
const SESSION_TTL_HOURS: i64 = 1;

/// Create a new session token for an authenticated member.
pub fn create_token(secret: &str, member_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + Duration::hours(SESSION_TTL_HOURS);

    let claims = Claims {
        sub: member_id.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate a session token and return its claims.
pub fn validate_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only";

    #[test]
    fn test_create_and_validate_token() {
        let token = create_token(SECRET, "M2").expect("should create token");

        let claims = validate_token(SECRET, &token).expect("should validate token");
        assert_eq!(claims.sub, "M2");
    }

    #[test]
    fn test_token_expires_one_hour_after_issuance() {
        let token = create_token(SECRET, "M1").expect("should create token");

        let claims = validate_token(SECRET, &token).expect("should validate token");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = validate_token(SECRET, "invalid-token");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(SECRET, "M1").expect("should create token");

        let result = validate_token("wrong-secret", &token);
        assert!(result.is_err());
    }
}
