use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::user::models::GoogleProfile;
use crate::domain::user::ports::GoogleTokenVerifier;
use crate::user::errors::GoogleVerifyError;

/// Verifies Google ID tokens against the tokeninfo endpoint.
///
/// Google answers with the profile the token attests to, or a non-success
/// status for anything it does not accept.
pub struct GoogleTokenInfoClient {
    http: reqwest::Client,
    tokeninfo_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenInfoResponse {
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl GoogleTokenInfoClient {
    pub fn new(tokeninfo_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            tokeninfo_url: tokeninfo_url.into(),
        }
    }
}

#[async_trait]
impl GoogleTokenVerifier for GoogleTokenInfoClient {
    async fn verify(&self, id_token: &str) -> Result<GoogleProfile, GoogleVerifyError> {
        let response = self
            .http
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| GoogleVerifyError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GoogleVerifyError::Rejected);
        }

        let info: TokenInfoResponse = response
            .json()
            .await
            .map_err(|e| GoogleVerifyError::MalformedResponse(e.to_string()))?;

        let email = info
            .email
            .ok_or_else(|| GoogleVerifyError::MalformedResponse("missing email".to_string()))?;

        Ok(GoogleProfile {
            email,
            name: info.name,
            picture: info.picture,
        })
    }
}
