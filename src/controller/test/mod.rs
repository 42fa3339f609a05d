use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use tower::ServiceExt;

use crate::{
    config::{Config, MembershipSource},
    service::classifier::RoleLists,
    startup,
};

mod routes;

fn test_config() -> Config {
    Config {
        discord_client_id: "client-id".to_string(),
        discord_client_secret: "client-secret".to_string(),
        discord_redirect_url: "http://localhost:3001/auth/discord/callback".to_string(),
        discord_guild_id: "1".to_string(),
        discord_bot_token: "bot-token".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        frontend_url: "http://localhost:5173".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        membership_source: MembershipSource::Guild,
        role_lists: RoleLists::default(),
        sheet_id: String::new(),
        sheet_api_key: String::new(),
        sheet_name: String::new(),
    }
}

/// Builds the real application (router, state, session and CORS layers) on
/// top of a fixed test configuration.
fn test_app() -> Router {
    startup::build_app(&test_config()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
