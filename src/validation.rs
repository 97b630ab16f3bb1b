// src/validation.rs
//! Listing schema checks.
//!
//! Every check runs even after one fails, so a rejected submission reports
//! all of its problems at once.

use crate::domain::listing::image_or_default;
use crate::domain::{ListingPatch, NewListing};
use crate::errors::AppError;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Dotted path, e.g. `listing.price`.
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    fn field(field: &str, message: impl Into<String>) -> Self {
        Self::new(format!("listing.{field}"), message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.path, self.message)
    }
}

/// Non-empty set of violations for one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Check a create payload of the shape `{ "listing": { ... } }`.
///
/// `title`, `price`, `location` and `country` are required and `price` must be
/// a number `>= 0`. Numeric strings are accepted for `price`, since HTML forms
/// only send text.
pub fn validate_listing(payload: &Value) -> Result<NewListing, ValidationErrors> {
    let listing = listing_object(payload, true)?.unwrap_or_default();
    let mut errors = Vec::new();

    let title = collect(required_text(&listing, "title"), &mut errors);
    let description = collect(optional_text(&listing, "description"), &mut errors);
    let image = collect(optional_text(&listing, "image"), &mut errors);
    let price = collect(required_price(&listing), &mut errors);
    let location = collect(required_text(&listing, "location"), &mut errors);
    let country = collect(required_text(&listing, "country"), &mut errors);

    match (title, description, image, price, location, country) {
        (Some(title), Some(description), Some(image), Some(price), Some(location), Some(country))
            if errors.is_empty() =>
        {
            Ok(NewListing {
                title,
                description: description.unwrap_or_default(),
                image: image_or_default(image),
                price,
                location,
                country,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

/// Check an update payload. Only supplied fields are checked, with the same
/// per-field rules as creation. A payload without `listing` is an empty patch.
pub fn validate_patch(payload: &Value) -> Result<ListingPatch, ValidationErrors> {
    let Some(listing) = listing_object(payload, false)? else {
        return Ok(ListingPatch::default());
    };
    let mut errors = Vec::new();
    let mut patch = ListingPatch::default();

    if is_present(&listing, "title") {
        patch.title = collect(required_text(&listing, "title"), &mut errors);
    }
    if is_present(&listing, "description") {
        patch.description = collect(optional_text(&listing, "description"), &mut errors).flatten();
    }
    if is_present(&listing, "image") {
        patch.image = collect(optional_text(&listing, "image"), &mut errors)
            .map(image_or_default);
    }
    if is_present(&listing, "price") {
        patch.price = collect(required_price(&listing), &mut errors);
    }
    if is_present(&listing, "location") {
        patch.location = collect(required_text(&listing, "location"), &mut errors);
    }
    if is_present(&listing, "country") {
        patch.country = collect(required_text(&listing, "country"), &mut errors);
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors(errors))
    }
}

fn listing_object(
    payload: &Value,
    required: bool,
) -> Result<Option<Map<String, Value>>, ValidationErrors> {
    match payload.get("listing") {
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        None | Some(Value::Null) if !required => Ok(None),
        None | Some(Value::Null) => Err(ValidationErrors(vec![FieldError::new(
            "listing",
            "is required",
        )])),
        Some(_) => Err(ValidationErrors(vec![FieldError::new(
            "listing",
            "must be of type object",
        )])),
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn is_present(listing: &Map<String, Value>, field: &str) -> bool {
    !matches!(listing.get(field), None | Some(Value::Null))
}

/// Scalars become text; arrays and objects are rejected.
fn as_text(value: &Value, field: &str) -> Result<String, FieldError> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(FieldError::field(field, "must be a string")),
    }
}

fn required_text(listing: &Map<String, Value>, field: &str) -> Result<String, FieldError> {
    let value = match listing.get(field) {
        None | Some(Value::Null) => return Err(FieldError::field(field, "is required")),
        Some(value) => value,
    };
    let text = as_text(value, field)?;
    if text.is_empty() {
        return Err(FieldError::field(field, "is not allowed to be empty"));
    }
    Ok(text)
}

fn optional_text(listing: &Map<String, Value>, field: &str) -> Result<Option<String>, FieldError> {
    match listing.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_text(value, field).map(Some),
    }
}

fn required_price(listing: &Map<String, Value>) -> Result<f64, FieldError> {
    let price = match listing.get("price") {
        None | Some(Value::Null) => return Err(FieldError::field("price", "is required")),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(FieldError::field("price", "is required"))
        }
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match price {
        Some(p) if !p.is_finite() => Err(FieldError::field("price", "must be a number")),
        Some(p) if p < 0.0 => Err(FieldError::field(
            "price",
            "must be greater than or equal to 0",
        )),
        Some(p) => Ok(p),
        None => Err(FieldError::field("price", "must be a number")),
    }
}
