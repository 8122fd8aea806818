//! Materializes the read-only section views of one request.
//!
//! Only sections that actually carry a schema are extracted. The body is
//! buffered (capped) and restored into the request afterwards, so the inner
//! handler still sees the original bytes. Extraction failures (unreadable
//! body, malformed JSON, undecodable query string) are recorded as that
//! section's diagnostics; the validators decide how to report them.

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequestParts, RawPathParams, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde_json::{map::Entry, Map, Value};

use crate::schema::FieldError;
use crate::schema_set::SchemaSet;
use crate::section::Section;

/// Default cap on how many body bytes are buffered for validation.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// One section's extracted view: the JSON value, or the diagnostics
/// explaining why no value could be produced.
pub(crate) type SectionOutcome = Result<Value, Vec<FieldError>>;

/// The extracted per-section outcomes. `None` means the section carries no
/// schema and was never materialized.
#[derive(Debug, Default)]
pub(crate) struct SectionValues {
    pub(crate) body: Option<SectionOutcome>,
    pub(crate) cookies: Option<SectionOutcome>,
    pub(crate) headers: Option<SectionOutcome>,
    pub(crate) params: Option<SectionOutcome>,
    pub(crate) query: Option<SectionOutcome>,
}

impl SectionValues {
    pub(crate) fn get(&self, section: Section) -> Option<&SectionOutcome> {
        match section {
            Section::Body => self.body.as_ref(),
            Section::Cookies => self.cookies.as_ref(),
            Section::Headers => self.headers.as_ref(),
            Section::Params => self.params.as_ref(),
            Section::Query => self.query.as_ref(),
        }
    }
}

/// Pull the needed section views out of the request, buffering the body only
/// when a body schema is registered. Returns the rebuilt request alongside
/// the outcomes.
pub(crate) async fn extract_sections(
    request: Request,
    set: &SchemaSet,
    body_limit: usize,
) -> (Request, SectionValues) {
    let (mut parts, body) = request.into_parts();
    let mut values = SectionValues::default();

    if set.contains(Section::Query) {
        values.query = Some(query_value(parts.uri.query().unwrap_or("")));
    }
    if set.contains(Section::Headers) {
        values.headers = Some(Ok(header_value(&parts.headers)));
    }
    if set.contains(Section::Cookies) {
        values.cookies = Some(Ok(cookie_value(&parts.headers)));
    }
    if set.contains(Section::Params) {
        values.params = Some(Ok(path_param_value(&mut parts).await));
    }

    let body = if set.contains(Section::Body) {
        match to_bytes(body, body_limit).await {
            Ok(bytes) => {
                values.body = Some(parse_body(&bytes));
                Body::from(bytes)
            }
            Err(_) => {
                values.body = Some(Err(vec![FieldError::new(
                    "body",
                    "Failed to read request body",
                )]));
                Body::empty()
            }
        }
    } else {
        body
    };

    (Request::from_parts(parts, body), values)
}

fn parse_body(bytes: &[u8]) -> SectionOutcome {
    // An absent body validates as an empty object, so required-field
    // diagnostics fire instead of a parse error.
    if bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|err| vec![FieldError::new("body", format!("Invalid JSON data: {err}"))])
}

fn query_value(raw: &str) -> SectionOutcome {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)
        .map_err(|err| vec![FieldError::new("query", format!("Invalid query string: {err}"))])?;
    let mut map = Map::new();
    for (key, value) in pairs {
        // repeated keys keep the last occurrence
        map.insert(key, Value::String(value));
    }
    Ok(Value::Object(map))
}

fn header_value(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        match map.entry(name.as_str().to_string()) {
            // repeated headers are comma-joined, per the HTTP convention
            Entry::Occupied(mut entry) => {
                if let Value::String(existing) = entry.get_mut() {
                    existing.push_str(", ");
                    existing.push_str(&value);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Value::String(value.into_owned()));
            }
        }
    }
    Value::Object(map)
}

fn cookie_value(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for header in headers.get_all(header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            let Some((name, value)) = pair.split_once('=') else { continue };
            map.insert(name.trim().to_string(), Value::String(value.trim().to_string()));
        }
    }
    Value::Object(map)
}

async fn path_param_value(parts: &mut Parts) -> Value {
    let mut map = Map::new();
    // Routes without captures simply yield an empty object.
    if let Ok(params) = RawPathParams::from_request_parts(parts, &()).await {
        for (name, value) in &params {
            map.insert(name.to_string(), Value::String(value.to_string()));
        }
    }
    Value::Object(map)
}
