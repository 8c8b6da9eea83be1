use async_trait::async_trait;

use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::GoogleProfile;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::GoogleVerifyError;
use crate::user::errors::MailerError;
use crate::user::errors::UserError;

/// Port for user and authentication domain operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the password when one is supplied.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and mint an access token.
    ///
    /// Unknown email, an account without a stored password, and a wrong
    /// password are indistinguishable to the caller.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Credentials did not match
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str)
        -> Result<AuthenticatedSession, UserError>;

    /// Verify a Google ID token, create the account on first sight, and mint
    /// an access token.
    ///
    /// # Errors
    /// * `GoogleTokenInvalid` - Google rejected or could not verify the token
    /// * `DatabaseError` - Database operation failed
    async fn login_with_google(&self, id_token: &str)
        -> Result<AuthenticatedSession, UserError>;

    /// Map an inbound bearer token to its account.
    ///
    /// An invalid token and a token whose subject no longer exists report the
    /// same error, so the boundary cannot distinguish "bad token" from
    /// "deleted user".
    ///
    /// # Errors
    /// * `InvalidOrExpiredToken` - Token failed verification or subject is gone
    /// * `DatabaseError` - Database operation failed
    async fn resolve_session(&self, token: &str) -> Result<User, UserError>;

    /// Issue a reset token for a registered email and hand it to the mailer.
    ///
    /// Succeeds without side effects when the email is unknown, so callers
    /// never learn whether an address is registered.
    ///
    /// # Errors
    /// * `Notification` - Reset email delivery failed
    /// * `DatabaseError` - Database operation failed
    async fn request_password_reset(&self, email: &str) -> Result<(), UserError>;

    /// Redeem a reset token and overwrite the account's password hash.
    ///
    /// Each token is redeemable once; replays report the same error as an
    /// expired token.
    ///
    /// # Errors
    /// * `InvalidOrExpiredToken` - Token invalid, expired, or already redeemed
    /// * `NotFound` - Subject vanished between issuance and redemption
    /// * `DatabaseError` - Database operation failed
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Overwrite a user's stored password hash. Durable on return.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;
}

/// Out-of-band delivery of password-reset tokens.
#[async_trait]
pub trait ResetMailer: Send + Sync + 'static {
    /// Deliver a reset email carrying the token to `to_email`.
    ///
    /// Failure must be observable; it is never swallowed or retried here.
    ///
    /// # Errors
    /// * `MailerError` - Message could not be built or delivered
    async fn send_reset_email(&self, to_email: &str, reset_token: &str)
        -> Result<(), MailerError>;
}

/// Verification of Google ID tokens.
#[async_trait]
pub trait GoogleTokenVerifier: Send + Sync + 'static {
    /// Verify an ID token and return the profile it attests to.
    ///
    /// # Errors
    /// * `Rejected` - Google did not accept the token
    /// * `RequestFailed` - Verification endpoint unreachable
    /// * `MalformedResponse` - Payload missing the expected fields
    async fn verify(&self, id_token: &str) -> Result<GoogleProfile, GoogleVerifyError>;
}
