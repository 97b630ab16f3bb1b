pub mod error;
pub mod listings;

pub use error::error_page;
pub use listings::{edit_page, index_page, new_page, show_page};
