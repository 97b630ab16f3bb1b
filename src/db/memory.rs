use parking_lot::Mutex;

use crate::db::{new_id, ListingStore};
use crate::domain::{Listing, ListingPatch, NewListing};
use crate::errors::AppError;

/// Process-local store kept in insertion order. Used for `:memory:` and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: Mutex<Vec<Listing>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingStore for MemoryStore {
    fn create(&self, new: NewListing) -> Result<Listing, AppError> {
        let listing = new.into_listing(new_id());
        self.listings.lock().push(listing.clone());
        Ok(listing)
    }

    fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        Ok(self.listings.lock().clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Listing>, AppError> {
        Ok(self.listings.lock().iter().find(|l| l.id == id).cloned())
    }

    fn update_by_id(&self, id: &str, patch: &ListingPatch) -> Result<Option<Listing>, AppError> {
        let mut listings = self.listings.lock();
        let Some(listing) = listings.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        patch.apply(listing);
        Ok(Some(listing.clone()))
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let mut listings = self.listings.lock();
        let before = listings.len();
        listings.retain(|l| l.id != id);
        Ok(listings.len() != before)
    }
}
