use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::identity::SessionIdentity;

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Response body for `GET /api/check-auth`.
///
/// Never an error: an unreadable or absent session is reported as
/// `authenticated: false`.
#[derive(Serialize, Deserialize)]
pub struct CheckAuthDto {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionIdentity>,
}

#[derive(Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct LogoutDto {
    pub success: bool,
}
