//! LINE Login client
//!
//! Builds the authorization redirect and performs the two outbound calls of
//! the flow: authorization code exchange and profile fetch. The calls are
//! strictly sequential because the profile fetch depends on the token.

use std::time::Duration;

use url::Url;

use super::{PkceParams, TokenResponse, UserProfile};
use crate::error::{LoginError, Result};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider endpoints and client registration, read-only after startup
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub authorize_endpoint: String,
    pub token_endpoint: String,
    pub profile_endpoint: String,
}

/// Client for the provider's authorization, token, and profile endpoints
pub struct LineClient {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl LineClient {
    /// Create a new client with a bounded-timeout HTTP client
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { config, http })
    }

    /// Build the authorization URL with PKCE parameters
    ///
    /// The caller must persist `state` and the code verifier into the
    /// session before presenting this URL to the browser.
    pub fn authorization_url(&self, state: &str, pkce: &PkceParams) -> Result<String> {
        let mut url = Url::parse(&self.config.authorize_endpoint)?;

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("state", state)
            .append_pair("scope", &self.config.scope)
            .append_pair("code_challenge", &pkce.code_challenge)
            .append_pair("code_challenge_method", "S256");

        Ok(url.to_string())
    }

    /// Exchange the authorization code for tokens
    ///
    /// PKCE replaces the client secret: the verifier generated alongside
    /// the state proves this process initiated the flow.
    pub async fn exchange_code(&self, code: &str, code_verifier: &str) -> Result<TokenResponse> {
        tracing::debug!("Exchanging authorization code at {}", self.config.token_endpoint);

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("code_verifier", code_verifier),
        ];

        let response = self
            .http
            .post(&self.config.token_endpoint)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Token exchange failed with status {}: {}", status, body);
            return Err(LoginError::TokenExchange { status, body });
        }

        Ok(response.json().await?)
    }

    /// Fetch the user profile with a bearer token
    pub async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        tracing::debug!("Fetching profile from {}", self.config.profile_endpoint);

        let response = self
            .http
            .get(&self.config.profile_endpoint)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Profile fetch failed with status {}: {}", status, body);
            return Err(LoginError::ProfileFetch { status, body });
        }

        Ok(response.json().await?)
    }
}
