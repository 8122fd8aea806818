use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::validator::RequestValidator;

/// Middleware entry point for a [`RequestValidator`].
///
/// Attach per route with
/// `axum::middleware::from_fn_with_state(validator, gatecheck::validate)`.
/// A passing request proceeds to the next pipeline step unmodified; a
/// failing one short-circuits with the classified 400 response. The next
/// step runs exactly once on the success path and never on the failure
/// path.
pub async fn validate(
    State(validator): State<RequestValidator>,
    request: Request,
    next: Next,
) -> Response {
    match validator.run(request).await {
        Ok(request) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}
