use std::collections::BTreeMap;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::schema::FieldError;
use crate::section::Section;

/// The raw diagnostic payload carried by a [`ValidationError`].
///
/// Multi-section failures are never collapsed into a flat message; the
/// original per-section records are kept so the caller can tell which
/// section(s) failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// One section failed; the diagnostics are that section's raw records.
    Section {
        section: Section,
        errors: Vec<FieldError>,
    },
    /// A whole-request pass failed; the map holds failing sections only.
    Request(BTreeMap<Section, Vec<FieldError>>),
}

impl ErrorDetail {
    /// The sections that contributed at least one violation, in
    /// enumeration order.
    pub fn failed_sections(&self) -> Vec<Section> {
        match self {
            ErrorDetail::Section { section, .. } => vec![*section],
            ErrorDetail::Request(map) => map.keys().copied().collect(),
        }
    }
}

/// A classified validation failure: category `"validation"`, message
/// `"Bad Request"`, HTTP status 400, raw diagnostics attached.
///
/// Produced if and only if at least one in-scope section's schema
/// evaluation reports violations. Pure translation; construction never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Bad Request")]
pub struct ValidationError {
    detail: ErrorDetail,
}

impl ValidationError {
    pub const CATEGORY: &'static str = "validation";
    pub const MESSAGE: &'static str = "Bad Request";
    pub const STATUS: StatusCode = StatusCode::BAD_REQUEST;

    /// Wrap one section's diagnostics.
    pub fn section(section: Section, errors: Vec<FieldError>) -> Self {
        Self {
            detail: ErrorDetail::Section { section, errors },
        }
    }

    /// Wrap a whole-request failure map (failing sections only).
    pub fn request(errors: BTreeMap<Section, Vec<FieldError>>) -> Self {
        Self {
            detail: ErrorDetail::Request(errors),
        }
    }

    pub fn category(&self) -> &'static str {
        Self::CATEGORY
    }

    pub fn status_code(&self) -> StatusCode {
        Self::STATUS
    }

    pub fn detail(&self) -> &ErrorDetail {
        &self.detail
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: &'static str,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<Section>,
    errors: serde_json::Value,
    timestamp: String,
    correlation_id: String,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let (section, errors) = match self.detail {
            ErrorDetail::Section { section, errors } => (
                Some(section),
                serde_json::to_value(errors).unwrap_or_default(),
            ),
            ErrorDetail::Request(map) => {
                (None, serde_json::to_value(map).unwrap_or_default())
            }
        };

        let payload = ErrorResponse {
            error: Self::CATEGORY,
            message: Self::MESSAGE,
            code: Self::STATUS.as_u16(),
            section,
            errors,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            correlation_id: correlation_id.clone(),
        };

        let mut response = (Self::STATUS, Json(payload)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}
