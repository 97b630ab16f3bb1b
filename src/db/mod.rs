pub mod connection;
pub mod listings;
pub mod memory;

use base64::Engine;
use rand::{rngs::OsRng, RngCore};

use crate::domain::{Listing, ListingPatch, NewListing};
use crate::errors::AppError;

pub use listings::SqliteStore;
pub use memory::MemoryStore;

/// Persistence boundary for listings. Lookups by id report a missing record
/// as `None`/`false`; deciding what that means is left to the caller.
///
/// No concurrency control: concurrent updates to one id are last-write-wins.
pub trait ListingStore: Send + Sync {
    fn create(&self, new: NewListing) -> Result<Listing, AppError>;

    /// Every listing, oldest first.
    fn list_all(&self) -> Result<Vec<Listing>, AppError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Listing>, AppError>;

    /// Merge `patch` into the stored listing and return the result.
    fn update_by_id(&self, id: &str, patch: &ListingPatch) -> Result<Option<Listing>, AppError>;

    /// `true` when a listing was removed.
    fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;
}

/// Opaque 16-character URL-safe id.
pub fn new_id() -> String {
    let mut raw = [0u8; 12];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}
