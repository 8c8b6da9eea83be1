use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;

use crate::config::SmtpConfig;
use crate::domain::user::ports::ResetMailer;
use crate::user::errors::MailerError;

/// SMTP-backed reset mailer.
///
/// Delivers the reset token embedded in a URL pointing at the frontend's
/// reset page. Delivery failures propagate to the caller; nothing is retried
/// here.
pub struct SmtpResetMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    frontend_url: String,
    support_address: String,
}

impl SmtpResetMailer {
    /// Build the mailer from SMTP configuration.
    ///
    /// Uses STARTTLS against the configured relay with username/password
    /// authentication.
    pub fn new(config: &SmtpConfig, frontend_url: &str) -> Result<Self, anyhow::Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config.from_address.parse::<Mailbox>()?;

        Ok(Self {
            transport,
            from,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
            support_address: config.support_address.clone(),
        })
    }

    fn reset_url(&self, reset_token: &str) -> String {
        format!("{}/reset-password?token={}", self.frontend_url, reset_token)
    }

    fn reset_body(&self, reset_url: &str) -> String {
        format!(
            r#"<html>
  <body>
    <p>We received a request to reset the password for your account.</p>
    <p><a href="{reset_url}">Reset your password</a></p>
    <p>The link expires in one hour. If you did not request a reset, you can
    ignore this email; your password will not change.</p>
    <p>Questions? Contact <a href="mailto:{support}">{support}</a>.</p>
  </body>
</html>"#,
            reset_url = reset_url,
            support = self.support_address,
        )
    }
}

#[async_trait]
impl ResetMailer for SmtpResetMailer {
    async fn send_reset_email(
        &self,
        to_email: &str,
        reset_token: &str,
    ) -> Result<(), MailerError> {
        let to = to_email
            .parse::<Mailbox>()
            .map_err(|e| MailerError::MessageBuild(e.to_string()))?;

        let reset_url = self.reset_url(reset_token);

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Reset Your Password - Coffee Shop Manager")
            .header(ContentType::TEXT_HTML)
            .body(self.reset_body(&reset_url))
            .map_err(|e| MailerError::MessageBuild(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::DeliveryFailed(e.to_string()))?;

        tracing::debug!("Reset email handed to relay");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpConfig;

    fn test_mailer() -> SmtpResetMailer {
        SmtpResetMailer::new(
            &SmtpConfig {
                host: "localhost".to_string(),
                port: 587,
                username: "user".to_string(),
                password: "password".to_string(),
                from_address: "Coffee Shop <no-reply@example.com>".to_string(),
                support_address: "support@example.com".to_string(),
            },
            "http://localhost:3000/",
        )
        .expect("Failed to build mailer")
    }

    #[tokio::test]
    async fn test_reset_url_embeds_token() {
        let mailer = test_mailer();

        let url = mailer.reset_url("tok123");
        assert_eq!(url, "http://localhost:3000/reset-password?token=tok123");
    }

    #[tokio::test]
    async fn test_reset_body_links_url_and_support() {
        let mailer = test_mailer();

        let body = mailer.reset_body("http://localhost:3000/reset-password?token=tok123");
        assert!(body.contains("http://localhost:3000/reset-password?token=tok123"));
        assert!(body.contains("support@example.com"));
    }
}
