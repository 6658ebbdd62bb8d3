//! Startup configuration.
//!
//! Read once from the process environment (after `.env` is loaded) and
//! validated before the listener binds, so a bad key or port never reaches
//! the first request.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub host: IpAddr,
    pub port: u16,
    /// Base of the Sheets REST API, without the `/v4` suffix.
    pub sheets_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &'static str| lookup(name).map(|v| v.trim().to_string());

        let api_key = required("SHEETS_API_KEY")?;
        let spreadsheet_id = required("SPREADSHEET_ID")?;
        if spreadsheet_id.contains('/') {
            return Err(ConfigError::Invalid {
                name: "SPREADSHEET_ID",
                reason: "expected the bare id, not the sheet url".to_string(),
            });
        }
        let sheet_name = required("SHEET_NAME")?;

        let port = match optional("PORT").filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid {
                        name: "PORT",
                        reason: format!("'{}' is not a port number", raw),
                    })
                }
                Ok(p) => p,
            },
        };

        let host = match optional("HOST").filter(|v| !v.is_empty()) {
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                reason: format!("'{}' is not an ip address", raw),
            })?,
        };

        let sheets_api_url = optional("SHEETS_API_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SHEETS_API_URL.to_string());
        let parsed = reqwest::Url::parse(&sheets_api_url).map_err(|e| ConfigError::Invalid {
            name: "SHEETS_API_URL",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "SHEETS_API_URL",
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            api_key,
            spreadsheet_id,
            sheet_name,
            host,
            port,
            sheets_api_url: sheets_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
