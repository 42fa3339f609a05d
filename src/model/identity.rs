use serde::{Deserialize, Serialize};

use crate::model::role::Role;

/// Role-relevant facts gathered at login time, kept on the session for
/// display and audit. They are never re-evaluated: the role derived from
/// them is fixed until the next login.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MembershipFacts {
    /// Discord role IDs held by the user in the configured guild.
    GuildRoles { roles: Vec<String> },
    /// Employee registry entry matched by the user's Discord ID.
    SheetRecord { name: String, grade: String },
}

/// Identity stored against the server-side session after a successful login.
///
/// Everything here is an immutable snapshot taken during the OAuth callback;
/// staleness is accepted until the user logs in again.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionIdentity {
    /// Discord user ID.
    pub id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub source_facts: MembershipFacts,
}
