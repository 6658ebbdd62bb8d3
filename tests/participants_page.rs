use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use roster::config::AppConfig;
use roster::error::FETCH_FAILED_MESSAGE;
use roster::web;

type Seen = Arc<Mutex<Vec<String>>>;

/// Stand-in for the Sheets API: answers every request with `body` and
/// records the request target.
async fn spawn_sheets(status: StatusCode, body: Value) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();
    let app = Router::new().fallback(move |uri: Uri| {
        let recorded = recorded.clone();
        let body = body.clone();
        async move {
            recorded.lock().unwrap().push(uri.to_string());
            (status, Json(body))
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}

fn config(api_url: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        api_key: "test-key".to_string(),
        spreadsheet_id: "sheet-123".to_string(),
        sheet_name: "Sheet1".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 8080,
        sheets_api_url: api_url.to_string(),
    })
}

fn full_row(team: &str) -> Value {
    json!([
        "2025-01-01 10:00:00",
        format!("REG-{}", team),
        "TOK1",
        "a@b.com",
        team,
        "Alice",
        "0812000000",
        "alice@b.com",
        "Jakarta",
        "Bob, Carol",
        "https://drive.google.com/open?id=logo",
        "Setuju"
    ])
}

async fn get_page(app: Router, method: Method) -> (StatusCode, String, axum::http::HeaderMap) {
    let resp = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap(), headers)
}

#[tokio::test]
async fn renders_complete_rows_and_skips_short_ones() {
    let (url, seen) = spawn_sheets(
        StatusCode::OK,
        json!({
            "range": "Sheet1!A2:L1000",
            "majorDimension": "ROWS",
            "values": [
                full_row("TeamAlpha"),
                ["2025-01-02", "REG-short", "TOK", "x@y.com", "TeamShort"],
                full_row("TeamBravo")
            ]
        }),
    )
    .await;

    let (status, body, headers) = get_page(web::app(config(&url)), Method::GET).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");

    let alpha = body.find("TeamAlpha").expect("first row rendered");
    let bravo = body.find("TeamBravo").expect("third row rendered");
    assert!(alpha < bravo);
    assert!(!body.contains("TeamShort"));
    assert!(body.contains("2 tim terdaftar"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("/v4/spreadsheets/sheet-123/values/Sheet1!A2:L"));
    assert!(seen[0].contains("key=test-key"));
}

#[tokio::test]
async fn empty_range_renders_empty_table() {
    let (url, _) = spawn_sheets(
        StatusCode::OK,
        json!({ "range": "Sheet1!A2:L1000", "majorDimension": "ROWS" }),
    )
    .await;

    let (status, body, _) = get_page(web::app(config(&url)), Method::GET).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Belum ada peserta terdaftar."));
    assert!(body.contains("0 tim terdaftar"));
}

#[tokio::test]
async fn upstream_error_returns_fetch_message() {
    let (url, _) = spawn_sheets(
        StatusCode::FORBIDDEN,
        json!({ "error": { "code": 403, "message": "API key not valid." } }),
    )
    .await;

    let (status, body, _) = get_page(web::app(config(&url)), Method::GET).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn unreachable_upstream_returns_fetch_message() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body, _) =
        get_page(web::app(config(&format!("http://{}", addr))), Method::GET).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn undecodable_body_returns_fetch_message() {
    let (url, _) = spawn_sheets(StatusCode::OK, json!("not a value range")).await;

    let (status, body, _) = get_page(web::app(config(&url)), Method::GET).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn any_method_is_served() {
    let (url, _) = spawn_sheets(StatusCode::OK, json!({ "values": [full_row("TeamPost")] })).await;

    let (status, body, _) = get_page(web::app(config(&url)), Method::POST).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("TeamPost"));
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let (url, seen) = spawn_sheets(StatusCode::OK, json!({})).await;

    let resp = web::app(config(&url))
        .oneshot(
            Request::builder()
                .uri("/peserta")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(seen.lock().unwrap().is_empty());
}
