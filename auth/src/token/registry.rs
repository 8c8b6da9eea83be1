use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

/// Tracks redeemed single-use token ids until their natural expiry.
///
/// A reset token is redeemable exactly once: redemption claims its id here,
/// and a second claim before the token expires fails. Entries live only as
/// long as the token itself, so the map stays bounded by the number of
/// outstanding reset tokens. Expired entries are pruned on every claim.
#[derive(Debug, Default)]
pub struct UsedTokenRegistry {
    used: Mutex<HashMap<String, i64>>,
}

impl UsedTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a token id that expires at `expires_at` (Unix timestamp).
    ///
    /// Returns true if the id was not previously claimed, false if it was
    /// already redeemed and has not yet expired.
    pub fn claim(&self, token_id: &str, expires_at: i64) -> bool {
        let now = Utc::now().timestamp();

        let mut used = self.used.lock().unwrap_or_else(|e| e.into_inner());
        used.retain(|_, exp| *exp > now);
        used.insert(token_id.to_string(), expires_at).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_succeeds() {
        let registry = UsedTokenRegistry::new();
        let exp = Utc::now().timestamp() + 3600;

        assert!(registry.claim("token-1", exp));
    }

    #[test]
    fn test_second_claim_fails() {
        let registry = UsedTokenRegistry::new();
        let exp = Utc::now().timestamp() + 3600;

        assert!(registry.claim("token-1", exp));
        assert!(!registry.claim("token-1", exp));
    }

    #[test]
    fn test_distinct_ids_are_independent() {
        let registry = UsedTokenRegistry::new();
        let exp = Utc::now().timestamp() + 3600;

        assert!(registry.claim("token-1", exp));
        assert!(registry.claim("token-2", exp));
    }

    #[test]
    fn test_expired_entries_are_pruned() {
        let registry = UsedTokenRegistry::new();
        let past = Utc::now().timestamp() - 10;
        let future = Utc::now().timestamp() + 3600;

        assert!(registry.claim("token-1", past));
        // The entry expired with its token, so the id is claimable again.
        assert!(registry.claim("token-1", future));
    }
}
