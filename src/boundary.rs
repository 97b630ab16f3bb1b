// src/boundary.rs
use crate::errors::{AppError, ResultResp};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run a route handler so that every way it can fail comes back as one `Err`.
///
/// Returned errors pass through untouched. A panic is caught and becomes
/// `AppError::Panicked`, so it ends at the error page instead of tearing down
/// the worker. The success path is not altered.
pub fn guard<F>(handler: F) -> ResultResp
where
    F: FnOnce() -> ResultResp,
{
    match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(result) => result,
        Err(payload) => Err(AppError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
