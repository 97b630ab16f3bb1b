// errors.rs
use astra::Response;
use http::StatusCode;
use thiserror::Error;

/// Shown to the user whenever the underlying failure is internal.
pub const GENERIC_MESSAGE: &str = "Something went wrong!";

/// Every failure a request can end in. All of them travel back to
/// `router::serve`, which hands them to the error page exactly once.
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload rejected by the listing schema. Carries every violation, joined.
    #[error("{0}")]
    Validation(String),

    /// No route matched the (verb, path) pair.
    #[error("Page not found!")]
    RouteNotFound,

    /// The store has no listing with this id.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Body could not be read or decoded.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Response Error: {0}")]
    Http(#[from] http::Error),

    #[error("Internal Error: {0}")]
    Internal(String),

    /// A handler panicked; caught by the boundary.
    #[error("Handler panicked: {0}")]
    Panicked(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound | AppError::ListingNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_)
            | AppError::Http(_)
            | AppError::Internal(_)
            | AppError::Panicked(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to render. Server-side failures are masked.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::RouteNotFound => "Page not found!".to_string(),
            AppError::ListingNotFound(_) => "Listing not found!".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Db(_)
            | AppError::Http(_)
            | AppError::Internal(_)
            | AppError::Panicked(_) => GENERIC_MESSAGE.to_string(),
        }
    }
}
