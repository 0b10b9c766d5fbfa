//! LINE Login PKCE demo - main entry point
//!
//! Serves the three pages of the flow: a login page that issues the
//! provider redirect, the OAuth callback, and the profile viewer.

use std::sync::Arc;

use line_login_pkce::config::Config;
use line_login_pkce::error::{LoginError, Result};
use line_login_pkce::oauth::LineClient;
use line_login_pkce::web::{self, AppState};
use tower_sessions::{
    cookie::{time::Duration, Key},
    Expiry, MemoryStore, SessionManagerLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const BANNER: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║                    LINE Login PKCE Demo                      ║
║      OAuth 2.0 authorization code flow with PKCE (S256)      ║
╚══════════════════════════════════════════════════════════════╝
"#;

const SESSION_EXPIRY_MINUTES: i64 = 30;

fn setup_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}", config.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let config = Config::parse_args();

    setup_logging(&config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    if !config.no_banner && !config.silent {
        eprintln!("{}", BANNER);
        info!("Client ID: {}", config.client_id);
        info!("Redirect URI: {}", config.redirect_uri());
        info!("Scopes: {}", config.scopes());
        info!("Listen address: {}", config.listen_addr);
        eprintln!();
    }

    if let Err(e) = run_server(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn signing_key(config: &Config) -> Result<Key> {
    match config.session_secret {
        Some(ref secret) => Key::try_from(secret.as_bytes())
            .map_err(|e| LoginError::Config(format!("Invalid session secret: {}", e))),
        None => {
            warn!("No SESSION_SECRET configured; sessions will not survive a restart");
            Ok(Key::generate())
        }
    }
}

async fn run_server(config: Config) -> Result<()> {
    let line = Arc::new(LineClient::new(config.provider())?);

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_signed(signing_key(&config)?)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            SESSION_EXPIRY_MINUTES,
        )));

    let app = web::router(AppState { line }).layer(session_layer);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received Ctrl+C, shutting down gracefully...");
}
