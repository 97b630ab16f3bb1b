// src/payload.rs
//! Request decoding: method override, query strings and bodies.

use crate::errors::AppError;
use astra::Body;
use http::{header, request::Parts, Method};
use serde_json::{Map, Value};
use std::io::Read;

/// Query key that lets an HTML form POST stand in for PUT or DELETE.
pub const METHOD_OVERRIDE_KEY: &str = "_method";

pub fn parse_query(query: Option<&str>) -> Vec<(String, String)> {
    query
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// The verb to dispatch on. Only POST can be overridden.
pub fn effective_method(parts: &Parts) -> Method {
    if parts.method != Method::POST {
        return parts.method.clone();
    }

    parse_query(parts.uri.query())
        .into_iter()
        .find(|(k, _)| k == METHOD_OVERRIDE_KEY)
        .and_then(|(_, v)| match v.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        })
        .unwrap_or(Method::POST)
}

/// Read at most `max_bytes` of body and decode it into a JSON value.
/// An empty body decodes to `{}`.
pub fn read_payload(parts: &Parts, mut body: Body, max_bytes: u64) -> Result<Value, AppError> {
    let mut raw = Vec::new();
    body.reader()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut raw)
        .map_err(|e| AppError::BadRequest(format!("could not read request body: {e}")))?;

    if raw.len() as u64 > max_bytes {
        return Err(AppError::BadRequest("request body too large".into()));
    }
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    if is_json(parts) {
        serde_json::from_slice(&raw)
            .map_err(|e| AppError::BadRequest(format!("malformed JSON body: {e}")))
    } else {
        Ok(decode_form(&raw))
    }
}

fn is_json(parts: &Parts) -> bool {
    parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|m| m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
}

/// Decode `application/x-www-form-urlencoded`, nesting `outer[inner]=v`
/// keys into `{ "outer": { "inner": "v" } }`.
pub fn decode_form(raw: &[u8]) -> Value {
    let mut root = Map::new();

    for (key, value) in url::form_urlencoded::parse(raw) {
        match split_nested(&key) {
            Some((outer, inner)) => {
                let slot = root
                    .entry(outer.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(map) = slot {
                    map.insert(inner.to_string(), Value::String(value.into_owned()));
                }
            }
            None => {
                root.insert(key.into_owned(), Value::String(value.into_owned()));
            }
        }
    }

    Value::Object(root)
}

fn split_nested(key: &str) -> Option<(&str, &str)> {
    let (outer, rest) = key.split_once('[')?;
    let inner = rest.strip_suffix(']')?;
    if outer.is_empty() || inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }
    Some((outer, inner))
}
