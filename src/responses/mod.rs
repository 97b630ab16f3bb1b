pub mod errors;
pub mod html;

pub use errors::error_response;
pub use html::{html_response, redirect, text_response};
