//! Registration board: reads participant rows from a Google Sheets range and
//! serves them as a single HTML table.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins; otherwise `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
