//! A deliberately small schema engine for exercising the middleware:
//! required typed fields, string minimum lengths, string-to-number
//! coercion, and unknown-field rejection honoring the resolved options.
//! The library itself ships no engine; this stands in for one.

use std::collections::BTreeMap;

use gatecheck::{EffectiveOptions, FieldError, Schema};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    String { min: usize },
    Number,
}

#[derive(Debug, Default)]
pub struct ObjectSchema {
    fields: BTreeMap<&'static str, Kind>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, name: &'static str, min: usize) -> Self {
        self.fields.insert(name, Kind::String { min });
        self
    }

    pub fn number(mut self, name: &'static str) -> Self {
        self.fields.insert(name, Kind::Number);
        self
    }
}

impl Schema for ObjectSchema {
    fn evaluate(&self, value: &Value, options: &EffectiveOptions) -> Result<(), Vec<FieldError>> {
        let Some(object) = value.as_object() else {
            return Err(vec![FieldError::new("value", "must be an object")]);
        };

        let mut errors = Vec::new();

        for (name, kind) in &self.fields {
            let Some(field) = object.get(*name) else {
                errors.push(FieldError::new(*name, "is required"));
                continue;
            };
            match kind {
                Kind::String { min } => match field.as_str() {
                    Some(s) if s.chars().count() >= *min => {}
                    Some(_) => errors.push(FieldError::new(
                        *name,
                        format!("must be at least {min} characters"),
                    )),
                    None => errors.push(FieldError::new(*name, "must be a string")),
                },
                Kind::Number => {
                    let coercible = field.is_number()
                        || field.as_str().is_some_and(|s| s.parse::<f64>().is_ok());
                    if !coercible {
                        errors.push(FieldError::new(*name, "must be a number"));
                    }
                }
            }
        }

        if !options.allow_unknown {
            for key in object.keys() {
                if !self.fields.contains_key(key.as_str()) {
                    errors.push(FieldError::new(key.clone(), "is not allowed"));
                }
            }
        }

        if options.abort_early {
            errors.truncate(1);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
