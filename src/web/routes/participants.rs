use std::sync::Arc;

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::PageError;
use crate::models::{Column, PageData, Participant, COLUMNS};
use crate::services::participant_service;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub participants: Vec<Participant>,
    pub columns: &'static [Column],
    pub build_id: &'static str,
}

impl From<PageData> for IndexTemplate {
    fn from(page: PageData) -> Self {
        Self {
            participants: page.participants,
            columns: &COLUMNS,
            build_id: env!("ROSTER_BUILD_ID"),
        }
    }
}

/// `/`: fetch, map, render. Every request goes to the sheet.
pub async fn participants_handler(
    State(config): State<Arc<AppConfig>>,
) -> Result<Html<String>, PageError> {
    let participants = participant_service::load_participants(&config)
        .await
        .map_err(|e| {
            let err = PageError::from(e);
            match &err {
                PageError::Connect(cause) => error!("Sheets client setup failed: {}", cause),
                _ => error!("Loading participants from spreadsheet failed: {}", err),
            }
            err
        })?;

    info!("📋 Rendering {} participants", participants.len());
    let template = IndexTemplate::from(PageData { participants });
    let body = template.render().map_err(|e| {
        error!("Rendering participants page failed: {}", e);
        PageError::Render(e)
    })?;
    Ok(Html(body))
}
