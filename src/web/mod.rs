use std::sync::Arc;

use axum::{routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

pub mod routes;

/// Full application router. Shared by `main` and the integration tests.
pub fn app(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", any(routes::participants::participants_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
