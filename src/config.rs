//! Configuration parsing and validation

use clap::Parser;

use crate::error::{LoginError, Result};
use crate::oauth::ProviderConfig;

const DEFAULT_SCOPES: &str = "profile";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/callback";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_AUTHORIZE_ENDPOINT: &str = "https://access.line.me/oauth2/v2.1/authorize";
const DEFAULT_TOKEN_ENDPOINT: &str = "https://api.line.me/oauth2/v2.1/token";
const DEFAULT_PROFILE_ENDPOINT: &str = "https://api.line.me/v2/profile";

/// Minimum length for the session cookie signing secret
const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "line-login-pkce",
    version,
    about = "LINE Login demo server",
    long_about = "Demonstration web server for the OAuth 2.0 authorization code flow with PKCE against LINE Login"
)]
pub struct Config {
    /// LINE Login channel ID, used as the OAuth client_id
    #[arg(long, env = "LINE_CLIENT_ID")]
    pub client_id: String,

    /// Redirect URI registered for the channel (default: http://localhost:3000/callback)
    #[arg(long, env = "LINE_REDIRECT_URI")]
    pub redirect_uri: Option<String>,

    /// Space-separated OAuth scopes (default: "profile")
    #[arg(long, env = "LINE_SCOPES")]
    pub scopes: Option<String>,

    /// Secret for signing the session cookie, at least 64 bytes; a random
    /// key is generated at startup when unset
    #[arg(long, env = "SESSION_SECRET")]
    pub session_secret: Option<String>,

    /// Address to listen on
    #[arg(long, env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Authorization endpoint override (testing)
    #[arg(long, env = "LINE_AUTHORIZE_ENDPOINT")]
    pub authorize_endpoint: Option<String>,

    /// Token endpoint override (testing)
    #[arg(long, env = "LINE_TOKEN_ENDPOINT")]
    pub token_endpoint: Option<String>,

    /// Profile endpoint override (testing)
    #[arg(long, env = "LINE_PROFILE_ENDPOINT")]
    pub profile_endpoint: Option<String>,

    /// Don't show the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Show only error messages
    #[arg(long, conflicts_with = "debug")]
    pub silent: bool,

    /// Enable debug logging
    #[arg(long, env = "LINE_LOGIN_DEBUG")]
    pub debug: bool,
}

impl Config {
    /// Parse configuration from CLI arguments and environment variables
    pub fn parse_args() -> Self {
        Config::parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(LoginError::Config("LINE client ID is required".to_string()));
        }

        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| LoginError::Config(format!("Invalid listen address: {}", e)))?;

        url::Url::parse(&self.redirect_uri())
            .map_err(|e| LoginError::Config(format!("Invalid redirect URI: {}", e)))?;

        for endpoint in [
            self.authorize_endpoint(),
            self.token_endpoint(),
            self.profile_endpoint(),
        ] {
            url::Url::parse(&endpoint)
                .map_err(|e| LoginError::Config(format!("Invalid endpoint URL: {}", e)))?;
        }

        if let Some(ref secret) = self.session_secret {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                return Err(LoginError::Config(format!(
                    "Session secret must be at least {} bytes",
                    MIN_SESSION_SECRET_LEN
                )));
            }
        }

        Ok(())
    }

    /// Get OAuth scopes as a space-separated string (with default)
    pub fn scopes(&self) -> String {
        self.scopes
            .clone()
            .unwrap_or_else(|| DEFAULT_SCOPES.to_string())
    }

    /// Get redirect URI (with default)
    pub fn redirect_uri(&self) -> String {
        self.redirect_uri
            .clone()
            .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string())
    }

    /// Get authorization endpoint (with default)
    pub fn authorize_endpoint(&self) -> String {
        self.authorize_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHORIZE_ENDPOINT.to_string())
    }

    /// Get token endpoint (with default)
    pub fn token_endpoint(&self) -> String {
        self.token_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_ENDPOINT.to_string())
    }

    /// Get profile endpoint (with default)
    pub fn profile_endpoint(&self) -> String {
        self.profile_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_ENDPOINT.to_string())
    }

    /// Build the provider configuration injected into the OAuth client
    pub fn provider(&self) -> ProviderConfig {
        ProviderConfig {
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri(),
            scope: self.scopes(),
            authorize_endpoint: self.authorize_endpoint(),
            token_endpoint: self.token_endpoint(),
            profile_endpoint: self.profile_endpoint(),
        }
    }

    /// Get log level based on flags
    pub fn log_level(&self) -> tracing::Level {
        if self.silent {
            tracing::Level::ERROR
        } else if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            client_id: "1234567890".to_string(),
            redirect_uri: None,
            scopes: None,
            session_secret: None,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            authorize_endpoint: None,
            token_endpoint: None,
            profile_endpoint: None,
            no_banner: false,
            silent: false,
            debug: false,
        }
    }

    #[test]
    fn test_defaults() {
        let config = base_config();
        assert_eq!(config.scopes(), "profile");
        assert_eq!(config.redirect_uri(), DEFAULT_REDIRECT_URI);
        assert_eq!(config.authorize_endpoint(), DEFAULT_AUTHORIZE_ENDPOINT);
        assert_eq!(config.token_endpoint(), DEFAULT_TOKEN_ENDPOINT);
        assert_eq!(config.profile_endpoint(), DEFAULT_PROFILE_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_client_id_rejected() {
        let mut config = base_config();
        config.client_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_listen_addr_rejected() {
        let mut config = base_config();
        config.listen_addr = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_session_secret_rejected() {
        let mut config = base_config();
        config.session_secret = Some("too-short".to_string());
        assert!(config.validate().is_err());

        config.session_secret = Some("x".repeat(64));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_provider_uses_overrides() {
        let mut config = base_config();
        config.token_endpoint = Some("http://localhost:9999/token".to_string());

        let provider = config.provider();
        assert_eq!(provider.token_endpoint, "http://localhost:9999/token");
        assert_eq!(provider.authorize_endpoint, DEFAULT_AUTHORIZE_ENDPOINT);
    }
}
