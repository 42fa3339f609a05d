use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serenity::http::Http;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::{
    config::{Config, MembershipSource},
    error::{config::ConfigError, AppError},
    router,
    service::membership::{GuildMembershipResolver, MembershipResolver, SheetMembershipResolver},
    state::{AppState, OAuth2Client},
};

/// How long an idle session survives before the store expires it.
const SESSION_TTL_HOURS: i64 = 24;

/// Assembles the full application: shared clients, membership resolver,
/// router, session and CORS layers. Called once from `main`; tests reuse it
/// to get the real middleware stack.
pub fn build_app(config: &Config) -> Result<Router, AppError> {
    let http_client = setup_reqwest_client()?;
    let oauth_client = setup_oauth_client(config)?;
    let resolver = setup_membership_resolver(config, &http_client);

    let state = AppState::new(
        http_client,
        oauth_client,
        resolver,
        config.membership_source,
        config.role_lists.clone(),
        config.frontend_url.clone(),
    );

    Ok(router::router()
        .with_state(state)
        .layer(setup_session_layer())
        .layer(setup_cors(config)))
}

/// Creates the HTTP client shared by all outbound calls.
///
/// Redirects are disabled so that a compromised upstream response cannot
/// bounce requests to internal addresses. A builder failure aborts startup
/// rather than falling back to a client with redirects re-enabled.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client pointed at Discord's authorize and token
/// endpoints.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(|source| {
            ConfigError::InvalidUrl {
                name: "discord_auth_url",
                source,
            }
        })?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(|source| {
            ConfigError::InvalidUrl {
                name: "discord_token_url",
                source,
            }
        })?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|source| {
                ConfigError::InvalidUrl {
                    name: "DISCORD_REDIRECT_URL",
                    source,
                }
            })?,
        );

    Ok(client)
}

/// Instantiates the membership backend selected by configuration.
pub fn setup_membership_resolver(
    config: &Config,
    http_client: &reqwest::Client,
) -> Arc<dyn MembershipResolver> {
    match config.membership_source {
        MembershipSource::Guild => Arc::new(GuildMembershipResolver::new(
            Arc::new(Http::new(&config.discord_bot_token)),
            config.discord_guild_id.clone(),
        )),
        MembershipSource::Sheet => Arc::new(SheetMembershipResolver::new(
            http_client.clone(),
            config.sheet_id.clone(),
            config.sheet_name.clone(),
            config.sheet_api_key.clone(),
        )),
    }
}

/// Configures the session middleware.
///
/// Cookies are HTTP-only, secure, and cross-site (the frontend lives on a
/// different origin); sessions expire after 24 idle hours.
pub fn setup_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_secure(true)
        .with_http_only(true)
        .with_same_site(SameSite::None)
        .with_expiry(Expiry::OnInactivity(Duration::hours(SESSION_TTL_HOURS)))
}

/// Allows the configured frontend origin with credentials.
///
/// An unparseable origin degrades to a deny-all CORS layer with a warning
/// rather than aborting startup.
pub fn setup_cors(config: &Config) -> CorsLayer {
    match config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
        Err(err) => {
            tracing::warn!(
                frontend_url = %config.frontend_url,
                error = %err,
                "Invalid frontend URL for CORS, cross-origin requests will be refused"
            );
            CorsLayer::new()
        }
    }
}
