use crate::db::connection::Database;
use crate::db::{ListingStore, MemoryStore, SqliteStore};
use crate::domain::NewListing;
use crate::errors::{AppError, ResultResp};
use crate::router::App;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_BODY_LIMIT: u64 = 64 * 1024;

/// App backed by a fresh in-memory store.
pub fn memory_app() -> (App, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = App::new(store.clone(), TEST_BODY_LIMIT);
    (app, store)
}

/// Fresh SQLite store in its own temp dir. Keep the `TempDir` alive for the test.
pub fn sqlite_store() -> (SqliteStore, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("listings.sqlite3");
    let store = SqliteStore::open(Database::new(path.to_string_lossy()))
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (store, dir)
}

pub fn app_with(store: Arc<dyn ListingStore>) -> App {
    App::new(store, TEST_BODY_LIMIT)
}

pub fn cabin(price: f64) -> NewListing {
    NewListing {
        title: "Cabin".into(),
        description: "Quiet cabin by the water".into(),
        image: "https://example.com/cabin.jpg".into(),
        price,
        location: "Lake".into(),
        country: "USA".into(),
    }
}

pub fn empty(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: Method, uri: &str, body: serde_json::Value) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form(method: Method, uri: &str, fields: &[(&str, &str)]) -> Request {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(encoded))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Unwrap the error of a handler result, reporting the status if it succeeded.
pub fn expect_err(result: ResultResp) -> AppError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(err) => err,
    }
}
