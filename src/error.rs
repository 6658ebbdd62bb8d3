use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const CONNECT_FAILED_MESSAGE: &str =
    "Maaf, ada masalah teknis saat menghubungkan ke Google Sheets.";
pub const FETCH_FAILED_MESSAGE: &str = "Maaf, tidak bisa memuat data peserta dari spreadsheet.";
pub const RENDER_FAILED_MESSAGE: &str = "Maaf, ada masalah saat menampilkan data.";

/// Failures talking to the Sheets API.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("building sheets client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid sheets request url: {0}")]
    Url(String),

    #[error("sheets request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("sheets api returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("decoding sheets response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SheetsError {
    /// True when no request was ever sent.
    pub fn is_client_setup(&self) -> bool {
        matches!(self, SheetsError::Client(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Terminal failures of the page pipeline. Each maps to a 500 with a fixed
/// message; the cause is only logged.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("sheets client unavailable: {0}")]
    Connect(#[source] SheetsError),

    #[error("fetching participant rows: {0}")]
    Fetch(#[source] SheetsError),

    #[error("rendering page: {0}")]
    Render(#[from] askama::Error),
}

impl From<SheetsError> for PageError {
    fn from(err: SheetsError) -> Self {
        if err.is_client_setup() {
            PageError::Connect(err)
        } else {
            PageError::Fetch(err)
        }
    }
}

impl PageError {
    pub fn public_message(&self) -> &'static str {
        match self {
            PageError::Connect(_) => CONNECT_FAILED_MESSAGE,
            PageError::Fetch(_) => FETCH_FAILED_MESSAGE,
            PageError::Render(_) => RENDER_FAILED_MESSAGE,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}
