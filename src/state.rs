//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup from the loaded configuration
//! and then cloned for each request handler through Axum's state extraction.
//! No handler reads configuration ambiently; everything it needs is a field
//! here.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::{
    config::MembershipSource,
    service::{classifier::RoleLists, membership::MembershipResolver},
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `reqwest::Client` and the resolver are
/// reference counted, the OAuth2 client is designed to be cloned, and the
/// rest are small owned values.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for making external API requests.
    ///
    /// Configured with redirects disabled to prevent SSRF. Shared by the
    /// OAuth exchange, the profile fetch, and the registry lookup.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Membership backend selected at startup.
    pub resolver: Arc<dyn MembershipResolver>,

    /// Which backend `resolver` is, used to shape the OAuth scope list.
    pub membership_source: MembershipSource,

    /// Configured guild role IDs per authorization level.
    pub role_lists: Arc<RoleLists>,

    /// Frontend base URL that login outcomes redirect back to.
    pub frontend_url: String,
}

impl AppState {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        resolver: Arc<dyn MembershipResolver>,
        membership_source: MembershipSource,
        role_lists: RoleLists,
        frontend_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            resolver,
            membership_source,
            role_lists: Arc::new(role_lists),
            frontend_url,
        }
    }
}
