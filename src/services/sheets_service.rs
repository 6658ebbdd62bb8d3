use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::SheetsError;

/// Last column read from the sheet (L, the consent statement).
const LAST_COLUMN: &str = "L";
/// Row 1 holds the headers.
const FIRST_DATA_ROW: u32 = 2;

/// A `values.get` range such as `Sheet1!A2:L`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange(String);

impl SheetRange {
    /// Every data row of `sheet_name`, columns A through L.
    pub fn data_rows(sheet_name: &str) -> Self {
        Self(format!(
            "{}!A{}:{}",
            quote_sheet_name(sheet_name),
            FIRST_DATA_ROW,
            LAST_COLUMN
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SheetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn quote_sheet_name(name: &str) -> String {
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return name.to_string();
    }
    format!("'{}'", name.replace('\'', "''"))
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

/// Read-only client for one spreadsheet, keyed by a static API key.
pub struct SheetsClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    spreadsheet_id: String,
}

impl SheetsClient {
    pub fn new(config: &AppConfig) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SheetsError::Client)?;

        Ok(Self {
            http,
            api_base: config.sheets_api_url.clone(),
            api_key: config.api_key.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
        })
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}`, with the id and range
    /// percent-encoded as path segments.
    pub fn values_url(&self, range: &SheetRange) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&self.api_base).map_err(|e| SheetsError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Url(format!("{} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                range.as_str(),
            ]);
        Ok(url)
    }

    /// Single attempt; no retry.
    pub async fn fetch_values(&self, range: &SheetRange) -> Result<Vec<Vec<Value>>, SheetsError> {
        let url = self.values_url(range)?;
        debug!("📡 Fetching sheet range {}", range);

        let resp = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(SheetsError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("📡 Sheets API non-OK for {}: {}", range, status);
            return Err(SheetsError::Status { status, body });
        }

        let parsed: ValueRange = resp.json().await.map_err(SheetsError::Decode)?;
        Ok(parsed.values.unwrap_or_default())
    }
}
