use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    config::MembershipSource,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    model::{
        api::{CheckAuthDto, LogoutDto},
        discord::DiscordUser,
    },
    service::{membership, oauth::DiscordAuthService},
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Both are optional so that a bare or truncated callback URL still reaches
/// the handler and turns into a redirect instead of a rejection.
///
/// # Fields
/// - `code` - Authorization code used to exchange for access tokens
/// - `state` - CSRF protection token that must match the value stored in the session
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url(state.membership_source);

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// OAuth callback: runs the full login flow and always answers with a
/// redirect to the frontend, carrying `?auth=success` or an opaque
/// `?error=<code>`. No internal detail ever reaches the browser.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    // Missing code short-circuits before any network call is made.
    let Some(code) = params.code else {
        return error_redirect(&state.frontend_url, "no_code");
    };

    match complete_login(&state, &session, code, params.state.as_deref()).await {
        Ok(()) => Redirect::temporary(&format!("{}?auth=success", state.frontend_url)),
        Err(err) => {
            tracing::warn!(error = %err, "Login attempt failed");
            error_redirect(&state.frontend_url, error_code(&err))
        }
    }
}

/// Exchange → profile → membership → classify → persist, strictly in that
/// order, each step awaiting the previous one. Single attempt throughout:
/// the first failure aborts the login.
async fn complete_login(
    state: &AppState,
    session: &Session,
    code: String,
    csrf_state: Option<&str>,
) -> Result<(), AppError> {
    validate_csrf(session, csrf_state).await?;

    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);
    let token = auth_service.exchange_code(code).await?;
    let user = auth_service.fetch_profile(&token).await?;

    establish_identity(state, session, &user).await
}

/// Resolves membership facts for the authenticated profile, classifies them
/// and persists the resulting identity into the session.
pub(super) async fn establish_identity(
    state: &AppState,
    session: &Session,
    user: &DiscordUser,
) -> Result<(), AppError> {
    let identity =
        membership::resolve_identity(state.resolver.as_ref(), &state.role_lists, user).await?;

    tracing::info!(user_id = %identity.id, role = %identity.role, "User logged in");

    AuthSession::new(session).set_identity(&identity).await?;

    Ok(())
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let (Some(stored), Some(received)) = (stored_state, csrf_state) {
        if stored == received {
            return Ok(());
        }
    }

    Err(AuthError::CsrfValidationFailed.into())
}

/// Maps a failed login onto the opaque error code carried by the frontend
/// redirect.
pub(super) fn error_code(err: &AppError) -> &'static str {
    match err {
        AppError::AuthErr(AuthError::MembershipNotFound(MembershipSource::Guild)) => "not_in_guild",
        AppError::AuthErr(AuthError::MembershipNotFound(MembershipSource::Sheet)) => "not_employee",
        AppError::AuthErr(AuthError::SessionPersist) => "session_error",
        AppError::SessionErr(_) => "session_error",
        _ => "auth_failed",
    }
}

fn error_redirect(frontend_url: &str, code: &str) -> Redirect {
    Redirect::temporary(&format!("{}?error={}", frontend_url, code))
}

/// GET /api/check-auth - Report whether the requester is logged in
///
/// Never errors: a session read failure is reported as not authenticated.
pub async fn check_auth(session: Session) -> Json<CheckAuthDto> {
    let user = AuthSession::new(&session).get_identity().await.ok().flatten();

    Json(CheckAuthDto {
        authenticated: user.is_some(),
        user,
    })
}

/// GET /api/user - Get the current session identity
///
/// # Returns
/// - `200 OK`: JSON SessionIdentity
/// - `401 Unauthorized`: No authenticated session
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require_auth().await?;

    Ok((StatusCode::OK, Json(identity)))
}

/// POST /api/logout - Destroy the current session
///
/// Deletes the session from the store and invalidates its ID; succeeds even
/// when no session existed.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok(Json(LogoutDto { success: true }))
}
