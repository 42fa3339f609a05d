//! Membership fact resolution.
//!
//! One interface, two deployment-mode implementations: a live Discord
//! guild-member lookup (`guild.rs`) and an employee registry spreadsheet
//! scan (`sheet.rs`). Which one runs is decided once at startup from
//! configuration; handlers only ever see the trait object.

use async_trait::async_trait;

use crate::{
    config::MembershipSource,
    error::{auth::AuthError, AppError},
    model::{
        discord::DiscordUser,
        identity::{MembershipFacts, SessionIdentity},
    },
    service::classifier::{self, RoleLists},
};

pub mod guild;
pub mod sheet;

pub use guild::GuildMembershipResolver;
pub use sheet::SheetMembershipResolver;

/// Resolves role-relevant facts for a Discord user ID.
///
/// `None` covers both "no membership" and "backend unreachable" — callers
/// cannot distinguish them, by design; implementations log the underlying
/// cause so operators can.
#[async_trait]
pub trait MembershipResolver: Send + Sync {
    async fn resolve(&self, user_id: &str) -> Option<MembershipFacts>;

    /// Which backend this resolver queries, used to pick the user-facing
    /// failure code (`not_in_guild` vs `not_employee`).
    fn source(&self) -> MembershipSource;
}

/// Builds the session identity for a freshly authenticated user.
///
/// Resolves membership facts, classifies them into a role, and snapshots the
/// profile metadata. This is the single place a role is ever computed; it is
/// not re-evaluated for the lifetime of the session.
pub async fn resolve_identity(
    resolver: &dyn MembershipResolver,
    role_lists: &RoleLists,
    user: &DiscordUser,
) -> Result<SessionIdentity, AppError> {
    let Some(facts) = resolver.resolve(&user.id).await else {
        return Err(AuthError::MembershipNotFound(resolver.source()).into());
    };

    let role = match &facts {
        MembershipFacts::GuildRoles { roles } => classifier::classify_guild_roles(role_lists, roles),
        MembershipFacts::SheetRecord { grade, .. } => classifier::classify_grade(grade),
    };

    Ok(SessionIdentity {
        id: user.id.clone(),
        username: user.username.clone(),
        discriminator: user.discriminator.clone().unwrap_or_else(|| "0".to_string()),
        avatar_url: user.avatar_url(),
        role,
        source_facts: facts,
    })
}
