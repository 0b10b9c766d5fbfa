//! HTTP handlers and router
//!
//! Three routes: `/` issues the login redirect and seeds the session,
//! `/callback` runs the authorization response through state validation,
//! token exchange, and profile fetch, and `/me` renders the stored profile.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_sessions::Session;

use super::pages;
use crate::error::LoginError;
use crate::oauth::{pkce, LineClient, PkceParams, UserProfile};

/// Session key for the CSRF state, written alongside the verifier
pub const SESSION_STATE_KEY: &str = "state";
/// Session key for the PKCE code verifier
pub const SESSION_VERIFIER_KEY: &str = "code_verifier";
/// Session key for the logged-in user profile
pub const SESSION_USER_KEY: &str = "user";

#[derive(Clone)]
pub struct AppState {
    pub line: Arc<LineClient>,
}

/// Build the application router
///
/// The session layer is attached by the caller so tests can supply their
/// own store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/callback", get(callback))
        .route("/me", get(me))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// `GET /` - login page
///
/// Generates fresh state and PKCE parameters, persists both into the
/// session, then renders the authorization link. Persisting first keeps the
/// invariant that any presented URL has its secrets stored.
async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, LoginError> {
    let csrf_state = pkce::generate_state();
    let params = PkceParams::generate();
    let login_url = state.line.authorization_url(&csrf_state, &params)?;

    session.insert(SESSION_STATE_KEY, &csrf_state).await?;
    session
        .insert(SESSION_VERIFIER_KEY, &params.code_verifier)
        .await?;

    Ok(Html(pages::index(&login_url)))
}

/// `GET /callback` - authorization response orchestrator
///
/// State validation short-circuits everything else; the token exchange and
/// profile fetch run strictly in sequence.
async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackQuery>,
) -> Result<Html<String>, LoginError> {
    if let Some(error) = params.error {
        tracing::warn!("Provider denied authorization: {}", error);
        let message = match params.error_description {
            Some(description) => format!("{}: {}", error, description),
            None => error,
        };
        return Err(LoginError::AuthorizationDenied(message));
    }

    // The stored state is single-use; remove it before comparing
    let stored_state: Option<String> = session.remove(SESSION_STATE_KEY).await?;
    match (params.state.as_deref(), stored_state.as_deref()) {
        (Some(returned), Some(stored)) if returned == stored => {}
        _ => return Err(LoginError::StateMismatch),
    }

    let code = params.code.ok_or(LoginError::MissingAuthorizationCode)?;

    // The verifier is written together with the state, so a session that
    // passed the state check but has no verifier never issued the redirect
    let code_verifier: String = session
        .remove(SESSION_VERIFIER_KEY)
        .await?
        .ok_or(LoginError::StateMismatch)?;

    let tokens = state.line.exchange_code(&code, &code_verifier).await?;
    let profile = state.line.fetch_profile(&tokens.access_token).await?;

    session.insert(SESSION_USER_KEY, &profile).await?;
    tracing::info!("Session established for user {}", profile.user_id);

    Ok(Html(pages::login_success(&profile)))
}

/// `GET /me` - profile viewer
async fn me(session: Session) -> Result<Html<String>, LoginError> {
    let user: Option<UserProfile> = session.get(SESSION_USER_KEY).await?;
    let user = user.ok_or(LoginError::NotLoggedIn)?;
    Ok(Html(pages::profile(&user)))
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            LoginError::AuthorizationDenied(_)
            | LoginError::StateMismatch
            | LoginError::MissingAuthorizationCode => {
                (StatusCode::BAD_REQUEST, pages::failure(&self.to_string()))
            }
            LoginError::TokenExchange { .. } | LoginError::ProfileFetch { .. } => {
                // Surfaces the raw provider body (escaped) to the user
                (StatusCode::BAD_GATEWAY, pages::failure(&self.to_string()))
            }
            LoginError::NotLoggedIn => (StatusCode::UNAUTHORIZED, pages::not_logged_in()),
            _ => {
                tracing::error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    pages::failure(&self.to_string()),
                )
            }
        };

        (status, Html(body)).into_response()
    }
}
