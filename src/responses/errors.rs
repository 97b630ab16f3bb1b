use crate::errors::AppError;
use crate::responses::html::html_with_status;
use crate::templates::pages::error_page;
use astra::Response;
use tracing::{error, warn};

/// Terminal stage for every failed request: pick the status, mask internal
/// detail, log, and render the error page once.
pub fn error_response(err: AppError) -> Response {
    let status = err.status();
    let message = err.public_message();

    if status.is_server_error() {
        error!(status = status.as_u16(), error = %err, "request failed");
    } else {
        warn!(status = status.as_u16(), error = %err, "request rejected");
    }

    html_with_status(status, error_page(status, &message))
}
