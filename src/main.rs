use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};

use roster::config::AppConfig;
use roster::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    roster::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let addr = config.listen_addr();
    info!(
        "Serving sheet '{}' of spreadsheet {}",
        config.sheet_name, config.spreadsheet_id
    );

    let app = web::app(Arc::new(config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Cannot bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(bound) => println!("🚀 Registration board running on http://{}", bound),
        Err(_) => println!("🚀 Registration board running on http://{}", addr),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
