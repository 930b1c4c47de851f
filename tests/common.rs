#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use worklog::api::{AppState, routes};
use worklog::core::LogStore;
use worklog::core::week::WeekStart;

pub const ORIGIN: &str = "http://localhost:3000";

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Router over a fresh store in `dir`.
pub fn test_app(dir: &tempfile::TempDir) -> Router {
    let db = dir.path().join("api.sqlite");
    let store = LogStore::open(db.to_str().unwrap(), 4, WeekStart::Sunday).expect("open store");
    routes::app(Arc::new(AppState::new(store)), &[ORIGIN.to_string()]).expect("build app")
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> serde_json::Value {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK, "GET {} failed: {}", uri, String::from_utf8_lossy(&body));
    serde_json::from_slice(&body).unwrap()
}

pub async fn post_log(app: &Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/logs")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, req).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Initialize DB and add a small dataset through the library API
pub fn init_db_with_data(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let store = LogStore::open(db_path, 1, WeekStart::Sunday).expect("open store");
    for (date, hours, category, description) in [
        ("2024-01-15", 8.0, "eng", "fix bug"),
        ("2024-01-15", 2.5, "eng", "review"),
        ("2024-01-20", 1.0, "meetings", "planning"),
    ] {
        store
            .create_entry(&worklog::models::NewEntry::new(
                chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                hours,
                category,
                description,
            ))
            .expect("create entry");
    }
}
