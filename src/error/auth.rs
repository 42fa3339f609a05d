use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{config::MembershipSource, model::api::ErrorDto, model::role::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The OAuth token exchange with Discord failed.
    ///
    /// Covers non-2xx responses from the token endpoint as well as transport
    /// failures. Single attempt, never retried.
    #[error("Failed to exchange authorization code for an access token")]
    ExchangeFailed,

    /// Fetching the authenticated user's profile from Discord failed.
    #[error("Failed to fetch the Discord user profile")]
    ProfileFetchFailed,

    /// No role facts could be resolved for the user.
    ///
    /// Deliberately covers both "genuinely absent" and "membership backend
    /// unreachable"; the resolver logs the underlying cause so operators can
    /// tell the two apart.
    #[error("No membership facts found for user via {0:?} lookup")]
    MembershipNotFound(MembershipSource),

    /// The session identity could not be persisted to the store.
    ///
    /// Login must be reported as failed in this case: the very next request
    /// after the redirect depends on the session being readable.
    #[error("Failed to persist session identity")]
    SessionPersist,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored in
    /// the session, indicating a potential CSRF attack or an invalid callback
    /// request. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No authenticated session is present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated session")]
    NotLoggedIn,

    /// The session's role level is below the route's minimum.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied: requires {required}, session has {actual}")]
    AccessDenied { required: Role, actual: Role },
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the error itself is logged where it
/// was raised.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - When no session identity is present
/// - 403 Forbidden - When the session role is below the required minimum
/// - 500 Internal Server Error - For upstream and persistence failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { required, actual } => {
                tracing::debug!(
                    required = %required,
                    required_level = required.level(),
                    actual = %actual,
                    actual_level = actual.level(),
                    "Rejected request below minimum role"
                );
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
