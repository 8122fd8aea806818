//! Declarative request validation middleware for axum
//!
//! `gatecheck` checks designated parts of an incoming request (body, query
//! parameters, cookies, headers, path parameters) against caller-supplied
//! schemas before the handler runs, and short-circuits with a structured
//! `400 Bad Request` when any check fails.
//!
//! # Overview
//!
//! The crate is built from four pieces:
//!
//! 1. **[`Schema`]** - the capability boundary to an external validation
//!    engine: `evaluate(value, options) -> outcome`. Any engine (or a plain
//!    closure) plugs in here; this crate does not implement a schema
//!    language of its own.
//! 2. **[`RequestValidator`]** - one constructor per section
//!    ([`RequestValidator::body`], [`query`](RequestValidator::query),
//!    [`cookies`](RequestValidator::cookies),
//!    [`headers`](RequestValidator::headers),
//!    [`params`](RequestValidator::params)) plus the whole-request form
//!    [`RequestValidator::request`], which evaluates every registered
//!    section exhaustively and reports all failing sections in one error.
//! 3. **[`ValidationOptions`]** - optional switches layered over the
//!    baseline defaults (collect all violations, reject unknown fields).
//! 4. **[`validate`]** - the axum middleware function wiring a validator
//!    into a route's pipeline.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{middleware, routing::post, Router};
//! use gatecheck::{validate, RequestValidator, SchemaSet, ValidationOptions};
//!
//! let validator = RequestValidator::request(
//!     SchemaSet::new().body(create_item_schema).query(paging_schema),
//! )
//! .with_options(ValidationOptions::new().with_allow_unknown(true));
//!
//! let app: Router = Router::new()
//!     .route("/items", post(create_item))
//!     .route_layer(middleware::from_fn_with_state(validator, validate));
//! ```
//!
//! # Validation error response
//!
//! When validation fails, a 400 Bad Request is returned:
//!
//! ```json
//! {
//!   "error": "validation",
//!   "message": "Bad Request",
//!   "code": 400,
//!   "section": "body",
//!   "errors": [
//!     {"field": "name", "message": "must be at least 3 characters"}
//!   ],
//!   "timestamp": "2026-02-20T10:30:00Z",
//!   "correlation_id": "uuid-here"
//! }
//! ```
//!
//! The whole-request form replaces the `section` tag with a map under
//! `errors`, keyed by section name and populated only for sections that
//! failed:
//!
//! ```json
//! {
//!   "error": "validation",
//!   "message": "Bad Request",
//!   "code": 400,
//!   "errors": {
//!     "body": [{"field": "name", "message": "is required"}],
//!     "query": [{"field": "page", "message": "must be a number"}]
//!   },
//!   "timestamp": "2026-02-20T10:30:00Z",
//!   "correlation_id": "uuid-here"
//! }
//! ```

pub mod error;
mod extract;
pub mod middleware;
pub mod options;
pub mod schema;
pub mod schema_set;
pub mod section;
pub mod validator;

// Re-export commonly used items
pub use error::{ErrorDetail, ValidationError};
pub use extract::DEFAULT_BODY_LIMIT;
pub use middleware::validate;
pub use options::{EffectiveOptions, ValidationOptions};
pub use schema::{FieldError, Schema};
pub use schema_set::SchemaSet;
pub use section::Section;
pub use validator::RequestValidator;
