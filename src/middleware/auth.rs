use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{identity::SessionIdentity, role::Role},
};

/// Access gate comparing the session's role level against a route's minimum.
///
/// The role was classified once at login and lives in the session itself, so
/// checks here are pure comparisons with no backend lookups.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an authenticated session.
    ///
    /// # Returns
    /// - `Ok(SessionIdentity)` - A logged-in identity is present
    /// - `Err(AuthError::NotLoggedIn)` - No identity in session (401)
    pub async fn require_auth(&self) -> Result<SessionIdentity, AppError> {
        let Some(identity) = AuthSession::new(self.session).get_identity().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(identity)
    }

    /// Requires an authenticated session with at least the given role.
    ///
    /// # Returns
    /// - `Ok(SessionIdentity)` - Identity present at or above `minimum`
    /// - `Err(AuthError::NotLoggedIn)` - No identity in session (401)
    /// - `Err(AuthError::AccessDenied)` - Identity below `minimum` (403)
    pub async fn require_role(&self, minimum: Role) -> Result<SessionIdentity, AppError> {
        let identity = self.require_auth().await?;

        if identity.role < minimum {
            return Err(AuthError::AccessDenied {
                required: minimum,
                actual: identity.role,
            }
            .into());
        }

        Ok(identity)
    }
}
