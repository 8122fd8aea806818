use std::collections::BTreeMap;

use axum::extract::Request;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::extract::{extract_sections, SectionValues, DEFAULT_BODY_LIMIT};
use crate::options::{EffectiveOptions, ValidationOptions};
use crate::schema::{FieldError, Schema};
use crate::schema_set::SchemaSet;
use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Check exactly one section and short-circuit on it.
    Single(Section),
    /// Check every registered section exhaustively before reporting.
    Full,
}

/// A configured validator for one route.
///
/// Cheap to clone; schemas and options are shared immutably across every
/// in-flight request, so a clone per request needs no locking. Attach it
/// with [`axum::middleware::from_fn_with_state`] and [`validate`]:
///
/// ```ignore
/// use axum::{middleware, routing::post, Router};
/// use gatecheck::{validate, RequestValidator};
///
/// let validator = RequestValidator::body(my_schema);
/// let app: Router = Router::new()
///     .route("/items", post(create_item))
///     .route_layer(middleware::from_fn_with_state(validator, validate));
/// ```
///
/// [`validate`]: crate::middleware::validate
#[derive(Debug, Clone)]
pub struct RequestValidator {
    mode: Mode,
    set: SchemaSet,
    options: ValidationOptions,
    body_limit: usize,
}

impl RequestValidator {
    fn new(mode: Mode, set: SchemaSet) -> Self {
        Self {
            mode,
            set,
            options: ValidationOptions::default(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    fn single(section: Section, schema: impl Schema + 'static) -> Self {
        Self::new(Mode::Single(section), SchemaSet::new().set(section, schema))
    }

    /// Validate the parsed JSON body.
    pub fn body(schema: impl Schema + 'static) -> Self {
        Self::single(Section::Body, schema)
    }

    /// Validate the cookie pairs.
    pub fn cookies(schema: impl Schema + 'static) -> Self {
        Self::single(Section::Cookies, schema)
    }

    /// Validate the request headers.
    pub fn headers(schema: impl Schema + 'static) -> Self {
        Self::single(Section::Headers, schema)
    }

    /// Validate the matched path parameters.
    pub fn params(schema: impl Schema + 'static) -> Self {
        Self::single(Section::Params, schema)
    }

    /// Validate the decoded query string.
    pub fn query(schema: impl Schema + 'static) -> Self {
        Self::single(Section::Query, schema)
    }

    /// Validate every section present in the set in one exhaustive pass.
    ///
    /// Unlike chaining single-section validators, every registered section
    /// is evaluated before any failure is reported, so one response always
    /// reflects every failing section.
    pub fn request(set: SchemaSet) -> Self {
        Self::new(Mode::Full, set)
    }

    /// Override option switches for this validator. Switches left unset
    /// keep the baseline defaults; repeated calls layer left to right.
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = self.options.merge(&options);
        self
    }

    /// Cap on buffered body bytes (default 2 MiB).
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Run the validation pass over an incoming request. On success the
    /// request is handed back, body restored, for the next pipeline step.
    pub async fn run(&self, request: Request) -> Result<Request, ValidationError> {
        let (request, values) = extract_sections(request, &self.set, self.body_limit).await;
        self.check(&values)?;
        Ok(request)
    }

    /// The core pass: synchronous and framework-free.
    fn check(&self, values: &SectionValues) -> Result<(), ValidationError> {
        let options = self.options.resolve();
        match self.mode {
            Mode::Single(section) => {
                if let Some(errors) = self.check_section(section, values, &options) {
                    warn!(%section, violations = errors.len(), "request failed validation");
                    return Err(ValidationError::section(section, errors));
                }
            }
            Mode::Full => {
                let mut failed = BTreeMap::new();
                for section in Section::ALL {
                    if let Some(errors) = self.check_section(section, values, &options) {
                        failed.insert(section, errors);
                    }
                }
                if !failed.is_empty() {
                    warn!(sections = failed.len(), "request failed validation");
                    return Err(ValidationError::request(failed));
                }
            }
        }
        debug!("request passed validation");
        Ok(())
    }

    /// Evaluate one section's schema, if any. `None` means the section
    /// passed or carries no schema.
    fn check_section(
        &self,
        section: Section,
        values: &SectionValues,
        options: &EffectiveOptions,
    ) -> Option<Vec<FieldError>> {
        let schema = self.set.get(section)?;
        match values.get(section)? {
            Ok(value) => schema.evaluate(value, options).err(),
            // extraction failures stand in for the section's diagnostics, so
            // an unparseable body on a whole-request validator is reported
            // next to every other failing section instead of preempting them
            Err(errors) => Some(errors.clone()),
        }
    }
}
