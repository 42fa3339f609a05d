//! Role-gated resource handlers.
//!
//! These are the protected routes behind the access guard; each states its
//! minimum role and lets `AuthGuard::require_role` produce the 401/403.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tower_sessions::Session;

use crate::{error::AppError, middleware::auth::AuthGuard, model::role::Role};

/// GET /api/employees - Employee-level resource
///
/// # Returns
/// - `200 OK`: Resource payload
/// - `401 Unauthorized`: No authenticated session
/// - `403 Forbidden`: Session role below employee
pub async fn list_employees(session: Session) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require_role(Role::Employee).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Liste des employés",
            "requested_by": identity.username,
        })),
    ))
}

/// GET /api/recruitment - RH-level resource
pub async fn recruitment_overview(session: Session) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require_role(Role::Rh).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Dossiers de recrutement",
            "requested_by": identity.username,
        })),
    ))
}

/// POST /api/admin/action - Admin-level resource
pub async fn admin_action(session: Session) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&session).require_role(Role::Admin).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Action administrateur exécutée",
            "requested_by": identity.username,
        })),
    ))
}
