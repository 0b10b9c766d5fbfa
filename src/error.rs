//! Error types for the LINE Login demo

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authorization denied by provider: {0}")]
    AuthorizationDenied(String),

    #[error("State mismatch - callback did not originate from this session")]
    StateMismatch,

    #[error("Missing authorization code in callback")]
    MissingAuthorizationCode,

    #[error("Token exchange failed with status {status}: {body}")]
    TokenExchange {
        status: http::StatusCode,
        body: String,
    },

    #[error("Profile fetch failed with status {status}: {body}")]
    ProfileFetch {
        status: http::StatusCode,
        body: String,
    },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, LoginError>;
