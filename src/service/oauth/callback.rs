use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::{
    error::{auth::AuthError, AppError},
    model::discord::DiscordUser,
    service::oauth::{DiscordAuthService, DISCORD_API_USER_URL},
};

pub(crate) type DiscordTokenResponse = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

impl<'a> DiscordAuthService<'a> {
    /// Exchanges the authorization code for an access token.
    ///
    /// Single attempt; any failure (non-2xx from the token endpoint,
    /// transport error) aborts the login.
    pub async fn exchange_code(&self, code: String) -> Result<DiscordTokenResponse, AppError> {
        let auth_code = AuthorizationCode::new(code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Discord token exchange failed");
                AuthError::ExchangeFailed
            })?;

        Ok(token)
    }

    /// Retrieves the authenticated Discord user's profile using the provided access token
    pub async fn fetch_profile(
        &self,
        token: &DiscordTokenResponse,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(DISCORD_API_USER_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Discord profile request failed");
                AuthError::ProfileFetchFailed
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                "Discord profile request returned an error status"
            );
            return Err(AuthError::ProfileFetchFailed.into());
        }

        let user = response.json::<DiscordUser>().await.map_err(|err| {
            tracing::warn!(error = %err, "Failed to decode Discord profile response");
            AuthError::ProfileFetchFailed
        })?;

        Ok(user)
    }
}
