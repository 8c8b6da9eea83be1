use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenPurpose;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Tokens are HS256 JWTs. The signing secret is process-wide configuration;
/// the same key signs access and reset tokens, which are kept apart by the
/// purpose tag, never by key.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new issuer from the signing secret.
    ///
    /// The secret should be at least 256 bits for HS256 and must come from
    /// configuration, never from source.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed, URL-safe token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode a token and check signature, expiry, subject, and purpose.
    ///
    /// The expected purpose must match the token's tag exactly: an access
    /// token never verifies as a reset token and vice versa. Expiry is
    /// checked with zero leeway.
    ///
    /// # Errors
    /// * `Expired` - Expiry instant is in the past
    /// * `Invalid` - Signature invalid, structurally malformed, or subject missing
    /// * `PurposeMismatch` - Purpose tag differs from `expected`
    pub fn verify(&self, token: &str, expected: TokenPurpose) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        let claims = token_data.claims;

        if claims.sub.is_empty() {
            return Err(TokenError::Invalid("missing subject".to_string()));
        }

        if claims.purpose() != expected {
            return Err(TokenError::PurposeMismatch);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify_access_token() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue(&Claims::access("user@example.com", 30))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = issuer
            .verify(&token, TokenPurpose::Access)
            .expect("Failed to verify token");
        assert_eq!(claims.sub, "user@example.com");
    }

    #[test]
    fn test_verify_garbage_token() {
        let issuer = TokenIssuer::new(SECRET);

        let result = issuer.verify("not.a.token", TokenPurpose::Access);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer1 = TokenIssuer::new(b"secret1_at_least_32_bytes_long_key!");
        let issuer2 = TokenIssuer::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer1
            .issue(&Claims::access("user@example.com", 30))
            .expect("Failed to issue token");

        let result = issuer2.verify(&token, TokenPurpose::Access);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_reset_token_rejected_as_access() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue(&Claims::reset("user@example.com", 60))
            .expect("Failed to issue token");

        let result = issuer.verify(&token, TokenPurpose::Access);
        assert!(matches!(result, Err(TokenError::PurposeMismatch)));
    }

    #[test]
    fn test_access_token_rejected_as_reset() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue(&Claims::access("user@example.com", 30))
            .expect("Failed to issue token");

        let result = issuer.verify(&token, TokenPurpose::Reset);
        assert!(matches!(result, Err(TokenError::PurposeMismatch)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue(&Claims::access("user@example.com", -1))
            .expect("Failed to issue token");

        let result = issuer.verify(&token, TokenPurpose::Access);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue(&Claims::access("", 30))
            .expect("Failed to issue token");

        let result = issuer.verify(&token, TokenPurpose::Access);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_token_is_url_safe() {
        let issuer = TokenIssuer::new(SECRET);

        let token = issuer
            .issue(&Claims::reset("user@example.com", 60))
            .expect("Failed to issue token");

        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'));
    }
}
