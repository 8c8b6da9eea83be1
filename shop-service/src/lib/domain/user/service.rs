use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::UsedTokenRegistry;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::GoogleVerifyError;
use crate::user::errors::UserError;
use crate::user::ports::GoogleTokenVerifier;
use crate::user::ports::ResetMailer;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user and authentication operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Tokens are stateless; the only in-process state is the single-use
/// registry for redeemed reset tokens.
pub struct UserService<UR, RM, GV>
where
    UR: UserRepository,
    RM: ResetMailer,
    GV: GoogleTokenVerifier,
{
    repository: Arc<UR>,
    mailer: Arc<RM>,
    google_verifier: Arc<GV>,
    authenticator: Arc<Authenticator>,
    used_reset_tokens: UsedTokenRegistry,
}

impl<UR, RM, GV> UserService<UR, RM, GV>
where
    UR: UserRepository,
    RM: ResetMailer,
    GV: GoogleTokenVerifier,
{
    /// Create a new user service with injected dependencies.
    pub fn new(
        repository: Arc<UR>,
        mailer: Arc<RM>,
        google_verifier: Arc<GV>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            repository,
            mailer,
            google_verifier,
            authenticator,
            used_reset_tokens: UsedTokenRegistry::new(),
        }
    }
}

#[async_trait]
impl<UR, RM, GV> UserServicePort for UserService<UR, RM, GV>
where
    UR: UserRepository,
    RM: ResetMailer,
    GV: GoogleTokenVerifier,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = command
            .password
            .as_deref()
            .map(|password| self.authenticator.hash_password(password))
            .transpose()?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            name: command.name,
            picture: command.picture,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedSession, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        // Accounts created through Google sign-in carry no hash and cannot
        // log in with a password.
        let stored_hash = user
            .password_hash
            .as_deref()
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(password, stored_hash, user.email.as_str())
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                auth::AuthenticationError::Password(err) => UserError::Password(err.to_string()),
                auth::AuthenticationError::Token(err) => UserError::Unknown(err.to_string()),
            })?;

        Ok(AuthenticatedSession {
            user,
            access_token: result.access_token,
        })
    }

    async fn login_with_google(
        &self,
        id_token: &str,
    ) -> Result<AuthenticatedSession, UserError> {
        let profile = self.google_verifier.verify(id_token).await.map_err(|e| {
            tracing::warn!("Google token verification failed: {}", e);
            match e {
                GoogleVerifyError::Rejected => {
                    UserError::GoogleTokenInvalid("token rejected".to_string())
                }
                GoogleVerifyError::RequestFailed(msg)
                | GoogleVerifyError::MalformedResponse(msg) => UserError::GoogleTokenInvalid(msg),
            }
        })?;

        let email = EmailAddress::new(profile.email)?;

        let user = match self.repository.find_by_email(email.as_str()).await? {
            Some(user) => user,
            None => {
                self.register(RegisterUserCommand::new(
                    email,
                    profile.name,
                    profile.picture,
                    None,
                ))
                .await?
            }
        };

        let access_token = self
            .authenticator
            .issue_access_token(user.email.as_str())
            .map_err(|e| UserError::Unknown(e.to_string()))?;

        Ok(AuthenticatedSession { user, access_token })
    }

    async fn resolve_session(&self, token: &str) -> Result<User, UserError> {
        let subject = self
            .authenticator
            .verify_access_token(token)
            .map_err(|_| UserError::InvalidOrExpiredToken)?;

        // A valid token for a vanished account reports the same error as a
        // bad token, so the boundary leaks neither.
        self.repository
            .find_by_email(&subject)
            .await?
            .ok_or(UserError::InvalidOrExpiredToken)
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), UserError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            // Respond identically whether or not the address is registered.
            tracing::debug!("Password reset requested for unregistered email");
            return Ok(());
        };

        let reset_token = self
            .authenticator
            .issue_reset_token(user.email.as_str())
            .map_err(|e| UserError::Unknown(e.to_string()))?;

        self.mailer
            .send_reset_email(user.email.as_str(), &reset_token)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, "Failed to send password reset email: {}", e);
                UserError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "Password reset email sent");

        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), UserError> {
        let claims = self
            .authenticator
            .verify_reset_token(token)
            .map_err(|_| UserError::InvalidOrExpiredToken)?;

        // Each reset token is redeemable once; a replay is indistinguishable
        // from an expired token.
        let token_id = claims.jti.ok_or(UserError::InvalidOrExpiredToken)?;
        if !self.used_reset_tokens.claim(&token_id, claims.exp) {
            return Err(UserError::InvalidOrExpiredToken);
        }

        let user = self
            .repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| UserError::NotFound(claims.sub.clone()))?;

        let password_hash = self.authenticator.hash_password(new_password)?;

        self.repository
            .update_password(&user.id, &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Password reset completed");

        Ok(())
    }
}
