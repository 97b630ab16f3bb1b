use crate::db::ListingStore;
use crate::domain::NewListing;
use crate::errors::{AppError, ResultResp};
use crate::responses::{html_response, redirect};
use crate::templates::pages;
use crate::validation::validate_patch;
use serde_json::Value;
use tracing::info;

pub fn index(store: &dyn ListingStore) -> ResultResp {
    let listings = store.list_all()?;
    html_response(pages::index_page(&listings))
}

pub fn new_form() -> ResultResp {
    html_response(pages::new_page())
}

pub fn show(store: &dyn ListingStore, id: &str) -> ResultResp {
    let listing = store
        .find_by_id(id)?
        .ok_or_else(|| AppError::ListingNotFound(id.to_string()))?;
    html_response(pages::show_page(&listing))
}

/// `new` has already passed the validation gate.
pub fn create(store: &dyn ListingStore, new: NewListing) -> ResultResp {
    let listing = store.create(new)?;
    info!(id = %listing.id, title = %listing.title, "listing created");
    redirect("/listings")
}

pub fn edit_form(store: &dyn ListingStore, id: &str) -> ResultResp {
    let listing = store
        .find_by_id(id)?
        .ok_or_else(|| AppError::ListingNotFound(id.to_string()))?;
    html_response(pages::edit_page(&listing))
}

/// Merge the supplied fields. Each one is still type-checked so a stored
/// listing never stops satisfying the create rules.
pub fn update(store: &dyn ListingStore, id: &str, payload: &Value) -> ResultResp {
    let patch = validate_patch(payload)?;
    store
        .update_by_id(id, &patch)?
        .ok_or_else(|| AppError::ListingNotFound(id.to_string()))?;
    info!(%id, empty = patch.is_empty(), "listing updated");
    redirect(&format!("/listings/{id}"))
}

pub fn delete(store: &dyn ListingStore, id: &str) -> ResultResp {
    if !store.delete_by_id(id)? {
        return Err(AppError::ListingNotFound(id.to_string()));
    }
    info!(%id, "listing deleted");
    redirect("/listings")
}
