use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for reset-email delivery operations
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    #[error("Failed to build reset message: {0}")]
    MessageBuild(String),

    #[error("Failed to deliver reset email: {0}")]
    DeliveryFailed(String),
}

/// Error for Google ID-token verification
#[derive(Debug, Clone, Error)]
pub enum GoogleVerifyError {
    #[error("Google rejected the token")]
    Rejected,

    #[error("Token verification request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected token info payload: {0}")]
    MalformedResponse(String),
}

/// Top-level error for all user and authentication operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Authentication errors. Signature failure, corruption, expiry, purpose
    // mismatch, and replayed reset tokens all collapse into
    // InvalidOrExpiredToken; the distinction is never surfaced.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Invalid Google token: {0}")]
    GoogleTokenInvalid(String),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Failed to send password reset email: {0}")]
    Notification(String),

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<auth::PasswordError> for UserError {
    fn from(err: auth::PasswordError) -> Self {
        UserError::Password(err.to_string())
    }
}

impl From<MailerError> for UserError {
    fn from(err: MailerError) -> Self {
        UserError::Notification(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
