use serde_json::Value;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::SheetsError;
use crate::models::{Participant, COLUMN_COUNT};
use crate::services::sheets_service::{SheetRange, SheetsClient};

/// Fetches the configured sheet and maps it. Used by the page handler and
/// the export binary.
pub async fn load_participants(config: &AppConfig) -> Result<Vec<Participant>, SheetsError> {
    let client = SheetsClient::new(config)?;
    let range = SheetRange::data_rows(&config.sheet_name);
    let rows = client.fetch_values(&range).await?;
    Ok(map_rows(rows))
}

/// Maps raw rows to participants in input order. Short rows are logged and
/// dropped.
pub fn map_rows(rows: Vec<Vec<Value>>) -> Vec<Participant> {
    if rows.is_empty() {
        info!("No participant rows found in spreadsheet");
        return Vec::new();
    }

    rows.into_iter()
        .filter_map(|row| {
            if row.len() < COLUMN_COUNT {
                warn!(
                    "Skipping row with {} of {} columns: {:?}",
                    row.len(),
                    COLUMN_COUNT,
                    row
                );
                return None;
            }
            Participant::from_cells(row.iter().take(COLUMN_COUNT).map(cell_text).collect())
        })
        .collect()
}

/// Textual form of a cell as the API returned it.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
