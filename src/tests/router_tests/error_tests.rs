use crate::db::ListingStore;
use crate::domain::{Listing, ListingPatch, NewListing};
use crate::errors::{AppError, GENERIC_MESSAGE};
use crate::router::{handle, serve};
use crate::tests::utils::{app_with, body_string, empty, expect_err, json, memory_app};
use astra::Body;
use http::Method;
use serde_json::json as j;
use std::sync::Arc;

/// Fails every operation the way a broken database connection would.
struct FailingStore;

impl ListingStore for FailingStore {
    fn create(&self, _new: NewListing) -> Result<Listing, AppError> {
        Err(AppError::Internal("disk on fire".into()))
    }
    fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        Err(AppError::Internal("disk on fire".into()))
    }
    fn find_by_id(&self, _id: &str) -> Result<Option<Listing>, AppError> {
        Err(AppError::Internal("disk on fire".into()))
    }
    fn update_by_id(&self, _id: &str, _patch: &ListingPatch) -> Result<Option<Listing>, AppError> {
        Err(AppError::Internal("disk on fire".into()))
    }
    fn delete_by_id(&self, _id: &str) -> Result<bool, AppError> {
        Err(AppError::Internal("disk on fire".into()))
    }
}

/// Panics instead of returning, to exercise the handler guard.
struct PanickingStore;

impl ListingStore for PanickingStore {
    fn create(&self, _new: NewListing) -> Result<Listing, AppError> {
        panic!("create exploded")
    }
    fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        panic!("list exploded")
    }
    fn find_by_id(&self, _id: &str) -> Result<Option<Listing>, AppError> {
        panic!("find exploded")
    }
    fn update_by_id(&self, _id: &str, _patch: &ListingPatch) -> Result<Option<Listing>, AppError> {
        panic!("update exploded")
    }
    fn delete_by_id(&self, _id: &str) -> Result<bool, AppError> {
        panic!("delete exploded")
    }
}

#[test]
fn unmatched_routes_are_page_not_found() {
    let (app, _) = memory_app();
    let cases = [
        (Method::GET, "/nowhere"),
        (Method::PATCH, "/listings/abc"),
        (Method::DELETE, "/listings"),
        (Method::POST, "/listings/abc"),
        (Method::PUT, "/listings"),
        (Method::GET, "/listings/abc/edit/more"),
        (Method::GET, "/listings//edit"),
    ];

    for (method, uri) in cases {
        let err = expect_err(handle(empty(method.clone(), uri), &app));
        assert!(matches!(err, AppError::RouteNotFound), "{method} {uri}");

        let resp = serve(empty(method.clone(), uri), &app);
        assert_eq!(resp.status(), 404, "{method} {uri}");
        assert!(body_string(resp).contains("Page not found!"), "{method} {uri}");
    }
}

#[test]
fn unknown_override_value_is_not_a_route() {
    let (app, _) = memory_app();

    let resp = serve(empty(Method::POST, "/listings/abc?_method=OPTIONS"), &app);

    assert_eq!(resp.status(), 404);
}

#[test]
fn unknown_id_is_listing_not_found() {
    let (app, _) = memory_app();

    for req in [
        empty(Method::GET, "/listings/missing"),
        empty(Method::GET, "/listings/missing/edit"),
        json(Method::PUT, "/listings/missing", j!({"listing": {"title": "x"}})),
        empty(Method::DELETE, "/listings/missing"),
    ] {
        let resp = serve(req, &app);
        assert_eq!(resp.status(), 404);
        assert!(body_string(resp).contains("Listing not found!"));
    }
}

#[test]
fn store_failures_are_masked() {
    let app = app_with(Arc::new(FailingStore));

    let resp = serve(empty(Method::GET, "/listings"), &app);

    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains(GENERIC_MESSAGE));
    assert!(!body.contains("disk on fire"));
}

#[test]
fn validation_runs_before_store_on_create() {
    let app = app_with(Arc::new(FailingStore));

    let resp = serve(
        json(Method::POST, "/listings", j!({"listing": {"title": "Cabin"}})),
        &app,
    );

    assert_eq!(resp.status(), 400);
}

#[test]
fn handler_panics_become_internal_errors() {
    let app = app_with(Arc::new(PanickingStore));

    let err = expect_err(handle(empty(Method::GET, "/listings"), &app));
    assert!(matches!(err, AppError::Panicked(ref msg) if msg == "list exploded"));

    let resp = serve(empty(Method::GET, "/listings/abc"), &app);
    assert_eq!(resp.status(), 500);
    let body = body_string(resp);
    assert!(body.contains(GENERIC_MESSAGE));
    assert!(!body.contains("exploded"));
}

#[test]
fn oversized_body_is_rejected() {
    let (app, store) = memory_app();
    let huge = "x".repeat(128 * 1024);
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/listings")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("listing[title]={huge}")))
        .unwrap();

    let resp = serve(req, &app);

    assert_eq!(resp.status(), 400);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn malformed_json_is_bad_request() {
    let (app, _) = memory_app();
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/listings")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"listing\": "))
        .unwrap();

    let err = expect_err(handle(req, &app));

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}
