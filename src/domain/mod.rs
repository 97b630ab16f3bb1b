pub mod listing;

pub use listing::{Listing, ListingPatch, NewListing};
