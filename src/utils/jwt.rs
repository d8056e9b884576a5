// ============================================================================
// JWT - Client-side decoding of the bearer token payload
// ============================================================================
// The signature is NOT verified here; the backend does that on every request.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::User;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum JwtError {
    #[error("token does not have three segments")]
    Malformed,

    #[error("payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("payload does not contain the expected claims: {0}")]
    Claims(String),
}

/// Decodes the payload segment of `token` into `T`
pub fn decode_claims<T: DeserializeOwned>(token: &str) -> Result<T, JwtError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) if !payload.is_empty() => payload,
        _ => return Err(JwtError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| JwtError::Encoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| JwtError::Claims(e.to_string()))
}

pub fn decode_user(token: &str) -> Result<User, JwtError> {
    decode_claims(token)
}


#[cfg(test)]
mod tests {
    use super::test_tokens::*;
    use super::*;

    #[test]
    fn decodes_user_claims() {
        let user = decode_user(&valid_token()).unwrap();
        assert_eq!(user.id, "17");
        assert_eq!(user.username, "asha");
        assert_eq!(user.email, "asha@example.com");
    }

    #[test]
    fn tolerates_padded_payload() {
        let token = valid_token();
        let mut parts: Vec<&str> = token.split('.').collect();
        let padded = format!("{}==", parts[1]);
        parts[1] = &padded;
        assert!(decode_user(&parts.join(".")).is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(decode_user("not-a-token"), Err(JwtError::Malformed));
        assert_eq!(decode_user("a..c"), Err(JwtError::Malformed));
        assert!(matches!(decode_user("a.!!!.c"), Err(JwtError::Encoding(_))));
    }

    #[test]
    fn rejects_token_without_id() {
        let token = token_for(r#"{"sub": "asha"}"#);
        assert!(matches!(decode_user(&token), Err(JwtError::Claims(_))));
    }

    #[test]
    fn username_and_email_are_optional() {
        let user = decode_user(&token_for(r#"{"id": 17, "username": "asha"}"#)).unwrap();
        assert_eq!(user.id, "17");
        assert_eq!(user.username, "asha");
        assert_eq!(user.email, "");

        let user = decode_user(&token_for(r#"{"id": "17", "email": "asha@example.com"}"#)).unwrap();
        assert_eq!(user.username, "");
        assert_eq!(user.email, "asha@example.com");
    }
}
