//! OAuth2 login with Discord

use crate::state::OAuth2Client;

pub mod callback;
pub mod login;

pub(crate) const DISCORD_API_USER_URL: &str = "https://discord.com/api/users/@me";

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }
}
