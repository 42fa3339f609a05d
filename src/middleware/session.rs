//! Type-safe session management wrappers.
//!
//! Session access is split by concern, each struct wrapping the same
//! underlying `Session` but exposing only the methods relevant to it:
//! `AuthSession` for the stored identity and `CsrfSession` for the OAuth
//! CSRF token. This keeps key strings and (de)serialization in one place
//! instead of scattered across handlers.

use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    model::identity::SessionIdentity,
};

// Session key constants
const SESSION_AUTH_IDENTITY: &str = "auth:identity";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores and retrieves the classified `SessionIdentity` and handles session
/// lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the identity and flushes it to the session store.
    ///
    /// The explicit `save` matters: the caller redirects the browser
    /// immediately after, and the very next request must find the session in
    /// the store. A login where this fails must be reported as failed.
    ///
    /// # Returns
    /// - `Ok(())` - Identity durably persisted
    /// - `Err(AppError::AuthErr(SessionPersist))` - Store write failed
    pub async fn set_identity(&self, identity: &SessionIdentity) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_IDENTITY, identity)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to write identity into session");
                AuthError::SessionPersist
            })?;

        self.session.save().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to flush session to store");
            AuthError::SessionPersist
        })?;

        Ok(())
    }

    /// Retrieves the stored identity, if any.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - User is logged in
    /// - `Ok(None)` - No identity in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_identity(&self) -> Result<Option<SessionIdentity>, AppError> {
        let identity = self
            .session
            .get::<SessionIdentity>(SESSION_AUTH_IDENTITY)
            .await?;
        Ok(identity)
    }

    /// Destroys the session entirely.
    ///
    /// Deletes the record from the store and invalidates the session ID, so a
    /// destroyed ID cannot be presented again; this is stronger than clearing
    /// fields on a live session.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth
/// callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token for validation during the callback.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so it can only be used once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
