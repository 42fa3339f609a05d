use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

use crate::model::{
    identity::{MembershipFacts, SessionIdentity},
    role::Role,
};


fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

fn identity_with_role(role: Role) -> SessionIdentity {
    SessionIdentity {
        id: "123456789".to_string(),
        username: "jean".to_string(),
        discriminator: "0042".to_string(),
        avatar_url: None,
        role,
        source_facts: MembershipFacts::GuildRoles { roles: vec![] },
    }
}
