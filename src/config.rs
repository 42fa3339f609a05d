use crate::service::classifier::RoleLists;

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3001";
const DEFAULT_REDIRECT_URL: &str = "http://localhost:3001/auth/discord/callback";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Which membership backend resolves role facts for freshly logged-in users.
///
/// Selected once at startup via the `MEMBERSHIP_SOURCE` environment variable
/// (`guild` or `sheet`); the two backends are deployment modes, not something
/// switched per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipSource {
    /// Live Discord guild-member lookup through the bot token.
    Guild,
    /// Employee registry spreadsheet read through the Sheets API.
    Sheet,
}

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_guild_id: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub frontend_url: String,
    pub bind_address: String,

    pub membership_source: MembershipSource,
    pub role_lists: RoleLists,

    pub sheet_id: String,
    pub sheet_api_key: String,
    pub sheet_name: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Missing values are logged as warnings rather than aborting startup: the
    /// affected login flow will fail at runtime instead, which keeps unrelated
    /// routes (health checks, logout) serviceable on a misconfigured deploy.
    pub fn from_env() -> Self {
        let membership_source = membership_source_from_env();

        let config = Self {
            discord_client_id: required("DISCORD_CLIENT_ID"),
            discord_client_secret: required("DISCORD_CLIENT_SECRET"),
            discord_redirect_url: required_with_default(
                "DISCORD_REDIRECT_URL",
                DEFAULT_REDIRECT_URL,
            ),
            discord_guild_id: optional("DISCORD_GUILD_ID"),
            discord_bot_token: optional("DISCORD_BOT_TOKEN"),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            frontend_url: required_with_default("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            membership_source,
            role_lists: RoleLists {
                admin: id_list("DISCORD_ADMIN_ROLE_IDS"),
                rh: id_list("DISCORD_RH_ROLE_IDS"),
                employee: id_list("DISCORD_EMPLOYEE_ROLE_IDS"),
            },
            sheet_id: optional("SHEET_ID"),
            sheet_api_key: optional("SHEET_API_KEY"),
            sheet_name: optional("SHEET_NAME"),
        };

        match membership_source {
            MembershipSource::Guild => {
                warn_if_empty("DISCORD_GUILD_ID", &config.discord_guild_id);
                warn_if_empty("DISCORD_BOT_TOKEN", &config.discord_bot_token);
            }
            MembershipSource::Sheet => {
                warn_if_empty("SHEET_ID", &config.sheet_id);
                warn_if_empty("SHEET_API_KEY", &config.sheet_api_key);
                warn_if_empty("SHEET_NAME", &config.sheet_name);
            }
        }

        config
    }
}

fn membership_source_from_env() -> MembershipSource {
    match std::env::var("MEMBERSHIP_SOURCE").as_deref() {
        Ok("sheet") => MembershipSource::Sheet,
        Ok("guild") | Err(_) => MembershipSource::Guild,
        Ok(other) => {
            tracing::warn!(
                "Unknown MEMBERSHIP_SOURCE '{}', falling back to 'guild'",
                other
            );
            MembershipSource::Guild
        }
    }
}

fn required(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::warn!("Missing required environment variable: {}", name);
        String::new()
    })
}

fn required_with_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::warn!(
            "Missing environment variable {}, defaulting to {}",
            name,
            default
        );
        default.to_string()
    })
}

fn optional(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

fn warn_if_empty(name: &str, value: &str) {
    if value.is_empty() {
        tracing::warn!("Missing required environment variable: {}", name);
    }
}

/// Parses a comma-separated list of Discord role IDs, dropping empty entries.
fn id_list(name: &str) -> Vec<String> {
    std::env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
