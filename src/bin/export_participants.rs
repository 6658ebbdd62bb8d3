use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use roster::config::AppConfig;
use roster::services::participant_service;

/// Prints every accepted participant as one JSON object per line. Handy for
/// checking the sheet layout without starting the server.
#[tokio::main]
async fn main() {
    dotenv().ok();
    // stdout carries the JSON lines; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let participants = match participant_service::load_participants(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("export failed: {}", e);
            std::process::exit(1);
        }
    };

    for p in &participants {
        match serde_json::to_string(p) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("encoding participant failed: {}", e);
                std::process::exit(1);
            }
        }
    }
    eprintln!("exported {} participants", participants.len());
}
