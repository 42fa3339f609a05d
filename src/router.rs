use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{
    controller::{
        auth::{callback, check_auth, get_user, login, logout},
        health::health,
        protected::{admin_action, list_employees, recruitment_overview},
    },
    model::api::ErrorDto,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/discord", get(login))
        .route("/auth/discord/callback", get(callback))
        .route("/api/check-auth", get(check_auth))
        .route("/api/user", get(get_user))
        .route("/api/logout", post(logout))
        .route("/api/employees", get(list_employees))
        .route("/api/recruitment", get(recruitment_overview))
        .route("/api/admin/action", post(admin_action))
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
