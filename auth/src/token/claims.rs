use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Default lifetime of an access token.
pub const DEFAULT_ACCESS_TTL_MINUTES: i64 = 30;

/// Default lifetime of a password-reset token.
pub const DEFAULT_RESET_TTL_MINUTES: i64 = 60;

/// Restricts which operation may consume a token.
///
/// Access tokens authenticate ordinary requests; reset tokens are only
/// redeemable by the password-reset flow. A token of one purpose never
/// verifies as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    Access,
    Reset,
}

/// Claims carried by a signed bearer token.
///
/// Access tokens carry only `sub`, `exp`, and `iat`. Reset tokens
/// additionally carry the `type` tag and a unique `jti` consumed by the
/// single-use registry at redemption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the identity's email address)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Purpose tag; absent means access
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    purpose: Option<TokenPurpose>,

    /// Unique token identifier, present on reset tokens only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Create claims for an access token expiring `ttl_minutes` from now.
    pub fn access(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        Self::new(subject, ttl_minutes, None, None)
    }

    /// Create claims for a password-reset token expiring `ttl_minutes` from
    /// now, with a fresh token id for single-use tracking.
    pub fn reset(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        Self::new(
            subject,
            ttl_minutes,
            Some(TokenPurpose::Reset),
            Some(Uuid::new_v4().to_string()),
        )
    }

    fn new(
        subject: impl Into<String>,
        ttl_minutes: i64,
        purpose: Option<TokenPurpose>,
        jti: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            sub: subject.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            purpose,
            jti,
        }
    }

    /// Effective purpose of the token. A missing tag means access.
    pub fn purpose(&self) -> TokenPurpose {
        self.purpose.unwrap_or(TokenPurpose::Access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims() {
        let claims = Claims::access("user@example.com", 30);

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.purpose(), TokenPurpose::Access);
        assert!(claims.jti.is_none());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_reset_claims() {
        let claims = Claims::reset("user@example.com", 60);

        assert_eq!(claims.purpose(), TokenPurpose::Reset);
        assert!(claims.jti.is_some());
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_reset_token_ids_are_unique() {
        let a = Claims::reset("user@example.com", 60);
        let b = Claims::reset("user@example.com", 60);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_access_claims_omit_purpose_on_the_wire() {
        let serialized = serde_json::to_value(Claims::access("u@x.com", 30)).unwrap();
        assert!(serialized.get("type").is_none());
        assert!(serialized.get("jti").is_none());

        let serialized = serde_json::to_value(Claims::reset("u@x.com", 60)).unwrap();
        assert_eq!(serialized["type"], "reset");
    }
}
