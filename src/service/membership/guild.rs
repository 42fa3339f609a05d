use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{GuildId, UserId};
use serenity::http::Http;

use crate::{
    config::MembershipSource,
    model::identity::MembershipFacts,
    service::membership::MembershipResolver,
};

/// Resolves membership through the Discord guild-member endpoint using
/// bot-level credentials.
pub struct GuildMembershipResolver {
    http: Arc<Http>,
    guild_id: String,
}

impl GuildMembershipResolver {
    pub fn new(http: Arc<Http>, guild_id: String) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl MembershipResolver for GuildMembershipResolver {
    /// Fetches the user's guild member record and returns their role IDs.
    ///
    /// Any failure (404 for non-members, auth errors, transport errors) is
    /// treated as "not a member" after logging the cause.
    async fn resolve(&self, user_id: &str) -> Option<MembershipFacts> {
        let guild_id = parse_snowflake("guild id", &self.guild_id)?;
        let user_id = parse_snowflake("user id", user_id)?;

        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Some(MembershipFacts::GuildRoles {
                roles: member.roles.iter().map(|role| role.to_string()).collect(),
            }),
            Err(err) => {
                tracing::warn!(
                    user_id,
                    error = %err,
                    "Guild member lookup failed, treating user as not in guild"
                );
                None
            }
        }
    }

    fn source(&self) -> MembershipSource {
        MembershipSource::Guild
    }
}

/// Parses a Discord snowflake, rejecting zero since serenity IDs are non-zero.
fn parse_snowflake(what: &str, value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => {
            tracing::warn!("Invalid Discord {}: '{}'", what, value);
            None
        }
        Ok(id) => Some(id),
    }
}
