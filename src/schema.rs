//! The boundary to the external schema-validation engine.

use serde::Serialize;
use serde_json::Value;

use crate::options::EffectiveOptions;

/// A field-level validation error: the offending field path plus a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The schema-evaluation capability supplied by an external validation engine.
///
/// `evaluate` is synchronous and pure: `Ok(())` means the candidate value
/// satisfies the schema, `Err` carries the ordered list of violations. An
/// engine must honor both switches in [`EffectiveOptions`]: with
/// `abort_early` off (the default) every violation in the value is reported,
/// and with `allow_unknown` off, fields not declared in the schema are
/// violations.
///
/// A panic inside an engine is not caught by this crate; it surfaces through
/// the framework's generic fault handling, distinct from a validation
/// failure.
pub trait Schema: Send + Sync {
    fn evaluate(&self, value: &Value, options: &EffectiveOptions) -> Result<(), Vec<FieldError>>;
}

impl<F> Schema for F
where
    F: Fn(&Value, &EffectiveOptions) -> Result<(), Vec<FieldError>> + Send + Sync,
{
    fn evaluate(&self, value: &Value, options: &EffectiveOptions) -> Result<(), Vec<FieldError>> {
        self(value, options)
    }
}
