//! Authentication utilities library
//!
//! Provides the authentication core for the shop backend:
//! - Password hashing (Argon2id)
//! - Purpose-tagged bearer token issuance and verification
//! - Single-use tracking for password-reset tokens
//! - Authentication coordination
//!
//! Tokens are self-contained and signed; validity is determined solely by
//! signature correctness, expiry, and the purpose tag. No server-side session
//! store exists.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, TokenIssuer, TokenPurpose};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = issuer.issue(&Claims::access("user@example.com", 30)).unwrap();
//! let claims = issuer.verify(&token, TokenPurpose::Access).unwrap();
//! assert_eq!(claims.sub, "user@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "user@example.com").unwrap();
//!
//! // Resolve the token back to its subject
//! let subject = auth.verify_access_token(&result.access_token).unwrap();
//! assert_eq!(subject, "user@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenPurpose;
pub use token::UsedTokenRegistry;
