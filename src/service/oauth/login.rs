use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::{config::MembershipSource, service::oauth::DiscordAuthService};

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorize URL and a fresh CSRF token.
    ///
    /// The scope list depends on the membership backend: the guild lookup
    /// needs guild membership visibility, the registry lookup only needs the
    /// user's identity.
    pub fn login_url(&self, source: MembershipSource) -> (Url, CsrfToken) {
        let mut request = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()));

        if source == MembershipSource::Guild {
            request = request
                .add_scope(Scope::new("guilds".to_string()))
                .add_scope(Scope::new("guilds.members.read".to_string()));
        }

        let (authorize_url, csrf_state) = request.url();

        (authorize_url, csrf_state)
    }
}
