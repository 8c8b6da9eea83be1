use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenPurpose;
use crate::token::DEFAULT_ACCESS_TTL_MINUTES;
use crate::token::DEFAULT_RESET_TTL_MINUTES;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Holds the per-purpose token lifetimes so callers never pick a TTL at the
/// call site.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    access_ttl_minutes: i64,
    reset_ttl_minutes: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator with the default token lifetimes
    /// (30-minute access tokens, 60-minute reset tokens).
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_ttls(
            jwt_secret,
            DEFAULT_ACCESS_TTL_MINUTES,
            DEFAULT_RESET_TTL_MINUTES,
        )
    }

    /// Create an authenticator with explicit token lifetimes.
    pub fn with_ttls(jwt_secret: &[u8], access_ttl_minutes: i64, reset_ttl_minutes: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret),
            access_ttl_minutes,
            reset_ttl_minutes,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash. Malformed hashes verify as
    /// false.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_access_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue an access token for `subject` without password verification.
    ///
    /// Used when authentication was established by other means (Google
    /// sign-in).
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_issuer
            .issue(&Claims::access(subject, self.access_ttl_minutes))
    }

    /// Issue a password-reset token for `subject`.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_reset_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_issuer
            .issue(&Claims::reset(subject, self.reset_ttl_minutes))
    }

    /// Validate an access token and return its subject.
    ///
    /// # Errors
    /// * `TokenError` - Signature, structure, expiry, or purpose check failed
    pub fn verify_access_token(&self, token: &str) -> Result<String, TokenError> {
        self.token_issuer
            .verify(token, TokenPurpose::Access)
            .map(|claims| claims.sub)
    }

    /// Validate a reset token and return its full claims.
    ///
    /// Callers need `jti` and `exp` for single-use tracking, so the claims
    /// come back whole rather than just the subject.
    ///
    /// # Errors
    /// * `TokenError` - Signature, structure, expiry, or purpose check failed
    pub fn verify_reset_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_issuer.verify(token, TokenPurpose::Reset)
    }
}
