use serde::{Deserialize, Serialize};

const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

/// Discord user profile as returned by `GET /users/@me`.
///
/// Only the fields this application snapshots into the session are kept;
/// everything else in the payload is ignored. Accounts migrated to the new
/// username system report a discriminator of `"0"`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordUser {
    /// Builds the CDN URL for the user's avatar, if one is set.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("{}/avatars/{}/{}.png", DISCORD_CDN_URL, self.id, hash))
    }
}
