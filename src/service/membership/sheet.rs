use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::{
    config::MembershipSource,
    model::identity::MembershipFacts,
    service::membership::MembershipResolver,
};

const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Header cell markers locating the registry's header row. Matching is a
/// case-sensitive substring test; the sheet has carried both spellings over
/// its lifetime, so both are accepted.
const HEADER_MARKERS: [&str; 2] = ["ID Discord", "Discord ID"];

/// Fixed column offsets within a registry row.
const NAME_COLUMN: usize = 2;
const GRADE_COLUMN: usize = 4;
const DISCORD_ID_COLUMN: usize = 6;

const DEFAULT_NAME: &str = "Inconnu";
const DEFAULT_GRADE: &str = "Aucun";

/// Employee registry entry extracted from a matched row.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub name: String,
    pub grade: String,
}

/// Response envelope of the Sheets `values` endpoint.
#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Resolves membership by scanning the employee registry spreadsheet for a
/// row whose Discord ID column matches the user.
pub struct SheetMembershipResolver {
    http_client: reqwest::Client,
    sheet_id: String,
    sheet_name: String,
    api_key: String,
}

impl SheetMembershipResolver {
    pub fn new(
        http_client: reqwest::Client,
        sheet_id: String,
        sheet_name: String,
        api_key: String,
    ) -> Self {
        Self {
            http_client,
            sheet_id,
            sheet_name,
            api_key,
        }
    }

    /// Fetches the full sheet as rows of cell strings.
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetFetchError> {
        let mut url = Url::parse(SHEETS_API_URL).map_err(|_| SheetFetchError::BadUrl)?;
        url.path_segments_mut()
            .map_err(|_| SheetFetchError::BadUrl)?
            .push(&self.sheet_id)
            .push("values")
            .push(&self.sheet_name);
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(SheetFetchError::Transport)?;

        if !response.status().is_success() {
            return Err(SheetFetchError::Status(response.status()));
        }

        let range = response
            .json::<ValueRange>()
            .await
            .map_err(SheetFetchError::Transport)?;

        Ok(range.values)
    }
}

#[async_trait]
impl MembershipResolver for SheetMembershipResolver {
    /// Looks the user up in the registry.
    ///
    /// A fetch failure resolves to `None` exactly like a missing row; the
    /// cause is logged at warn so an outage can be told apart from a real
    /// non-match server-side.
    async fn resolve(&self, user_id: &str) -> Option<MembershipFacts> {
        let rows = match self.fetch_rows().await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(
                    user_id,
                    error = %err,
                    "Employee registry fetch failed, treating user as not registered"
                );
                return None;
            }
        };

        find_employee(&rows, user_id).map(|record| MembershipFacts::SheetRecord {
            name: record.name,
            grade: record.grade,
        })
    }

    fn source(&self) -> MembershipSource {
        MembershipSource::Sheet
    }
}

#[derive(Debug, thiserror::Error)]
enum SheetFetchError {
    #[error("invalid Sheets API URL")]
    BadUrl,
    #[error("Sheets API returned {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(reqwest::Error),
}

/// Scans registry rows for the given Discord ID.
///
/// The header row is the first row containing one of `HEADER_MARKERS` in any
/// cell; rows strictly after it are scanned in order and the first whose
/// trimmed ID column equals `discord_id` wins. Missing name/grade cells fall
/// back to their French placeholders. Returns `None` when no header row or no
/// matching row exists.
pub fn find_employee(rows: &[Vec<String>], discord_id: &str) -> Option<EmployeeRecord> {
    let header_index = rows.iter().position(|row| {
        row.iter()
            .any(|cell| HEADER_MARKERS.iter().any(|marker| cell.contains(marker)))
    })?;

    rows[header_index + 1..]
        .iter()
        .find(|row| {
            row.get(DISCORD_ID_COLUMN)
                .is_some_and(|cell| cell.trim() == discord_id)
        })
        .map(|row| EmployeeRecord {
            name: cell_or_default(row, NAME_COLUMN, DEFAULT_NAME),
            grade: cell_or_default(row, GRADE_COLUMN, DEFAULT_GRADE),
        })
}

fn cell_or_default(row: &[String], column: usize, default: &str) -> String {
    row.get(column)
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map_or_else(|| default.to_string(), str::to_string)
}
