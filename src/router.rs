use crate::boundary::guard;
use crate::db::ListingStore;
use crate::errors::{AppError, ResultResp};
use crate::handlers::listings;
use crate::payload::{effective_method, read_payload};
use crate::responses::{error_response, text_response};
use crate::validation::validate_listing;
use astra::{Request, Response};
use http::Method;
use std::sync::Arc;
use tracing::{debug, info, info_span};

/// Shared state handed to every request.
#[derive(Clone)]
pub struct App {
    pub store: Arc<dyn ListingStore>,
    pub max_body_bytes: u64,
}

impl App {
    pub fn new(store: Arc<dyn ListingStore>, max_body_bytes: u64) -> Self {
        Self {
            store,
            max_body_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Index,
    New,
    Show(String),
    Create,
    Edit(String),
    Update(String),
    Delete(String),
}

impl Route {
    /// Match a (verb, path) pair against the route table. A trailing slash is ignored.
    pub fn resolve(method: &Method, path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        let route = match (method.as_str(), segments.as_slice()) {
            ("GET", [""]) => Route::Root,
            ("GET", ["listings"]) => Route::Index,
            ("GET", ["listings", "new"]) => Route::New,
            ("GET", ["listings", id]) => Route::Show(id.to_string()),
            ("POST", ["listings"]) => Route::Create,
            ("GET", ["listings", id, "edit"]) => Route::Edit(id.to_string()),
            ("PUT", ["listings", id]) => Route::Update(id.to_string()),
            ("DELETE", ["listings", id]) => Route::Delete(id.to_string()),
            _ => return None,
        };

        match &route {
            Route::Show(id) | Route::Edit(id) | Route::Update(id) | Route::Delete(id)
                if id.is_empty() =>
            {
                None
            }
            _ => Some(route),
        }
    }
}

/// Run the chain for one request: resolve the route, apply the validation
/// gate where the route has one, then run the guarded handler.
pub fn handle(req: Request, app: &App) -> ResultResp {
    let (parts, body) = req.into_parts();
    let method = effective_method(&parts);

    let Some(route) = Route::resolve(&method, parts.uri.path()) else {
        return Err(AppError::RouteNotFound);
    };
    debug!(?route, "route matched");

    let payload = read_payload(&parts, body, app.max_body_bytes)?;
    let store = app.store.as_ref();

    match route {
        Route::Root => guard(|| text_response("CONNECTED")),
        Route::Index => guard(|| listings::index(store)),
        Route::New => guard(listings::new_form),
        Route::Show(id) => guard(|| listings::show(store, &id)),
        Route::Create => {
            let new = validate_listing(&payload)?;
            guard(|| listings::create(store, new))
        }
        Route::Edit(id) => guard(|| listings::edit_form(store, &id)),
        Route::Update(id) => guard(|| listings::update(store, &id, &payload)),
        Route::Delete(id) => guard(|| listings::delete(store, &id)),
    }
}

/// Entry point for the server: every request ends in exactly one response,
/// either the handler's or the rendered error page.
pub fn serve(req: Request, app: &App) -> Response {
    let span = info_span!("request", method = %req.method(), path = %req.uri().path());
    let _enter = span.enter();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    };

    info!(status = resp.status().as_u16(), "response");
    resp
}
