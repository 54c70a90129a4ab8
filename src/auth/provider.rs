//! The identity-provider boundary.
//!
//! The application never speaks OAuth itself: it asks an [`IdentityProvider`]
//! for a consent-screen URL, and later hands back the authorization code in
//! exchange for the user's claims. [`GoogleProvider`] is the real
//! implementation; tests substitute their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Claim;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

// Identity scopes only; this app never touches other Google APIs.
const SCOPES: &str = "openid email profile";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token exchange rejected: {status}: {body}")]
    TokenExchange {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("login callback rejected: {0}")]
    Callback(String),
}

/// The user's identity as established by the provider.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub claims: Vec<Claim>,
}

/// External identity provider: issues challenges and redeems callback codes.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL of the provider's consent screen for this login attempt.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange the callback's authorization code for the user's identity.
    async fn exchange_code(&self, code: &str) -> Result<Identity, ProviderError>;
}

/// Google OAuth2 authorization-code flow against Google's documented endpoints.
pub struct GoogleProvider {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    grant_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// The OIDC userinfo claims Google returns for the login scopes.
#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
    name: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
    picture: Option<String>,
    email: Option<String>,
}

impl GoogleProvider {
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}",
            AUTH_ENDPOINT,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(SCOPES),
            urlencoding::encode(state),
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<Identity, ProviderError> {
        // Exchange the code for an access token
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&TokenRequest {
                code,
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                redirect_uri: &self.redirect_uri,
                grant_type: "authorization_code",
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::TokenExchange { status, body });
        }

        let tokens: TokenResponse = response.json().await?;

        // Fetch the claims the token grants access to
        let info: UserInfo = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&tokens.access_token)
            .send()
            .await?
            .json()
            .await?;

        Ok(info.into_identity())
    }
}

impl UserInfo {
    /// Map present userinfo fields to claims, in a fixed order.
    fn into_identity(self) -> Identity {
        let mut claims = vec![Claim::new("sub", self.sub.clone())];
        for (name, value) in [
            ("name", self.name),
            ("given_name", self.given_name),
            ("family_name", self.family_name),
            ("picture", self.picture),
            ("email", self.email),
        ] {
            if let Some(value) = value {
                claims.push(Claim::new(name, value));
            }
        }

        Identity {
            subject: self.sub,
            claims,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_targets_the_consent_screen() {
        let provider = GoogleProvider::new(
            "client-123".into(),
            "secret".into(),
            "https://app.example.com/signin-google".into(),
        );

        let url = provider.authorize_url("state-xyz");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fsignin-google"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state=state-xyz"));
    }

    #[test]
    fn userinfo_maps_present_claims_in_a_fixed_order() {
        let info = UserInfo {
            sub: "123".into(),
            name: Some("Alice".into()),
            given_name: None,
            family_name: None,
            picture: None,
            email: Some("a@example.com".into()),
        };

        let identity = info.into_identity();

        assert_eq!(identity.subject, "123");
        assert_eq!(
            identity.claims,
            vec![
                Claim::new("sub", "123"),
                Claim::new("name", "Alice"),
                Claim::new("email", "a@example.com"),
            ]
        );
    }
}
