//! Option records passed through to schema evaluation.
//!
//! Two lifecycle layers exist: the baseline defaults baked into this crate
//! and a per-validator override supplied at construction. Precedence is
//! baseline → override, applied the same way for single-section and
//! whole-request validators.

use serde::{Deserialize, Serialize};

/// Per-validator option overrides.
///
/// Switches left unset fall back to the baseline defaults: collect every
/// violation in a section (`abort_early = false`) and reject fields not
/// declared in the schema (`allow_unknown = false`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Stop a section's evaluation at the first violation.
    pub abort_early: Option<bool>,
    /// Permit fields not declared in the schema.
    pub allow_unknown: Option<bool>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_abort_early(mut self, value: bool) -> Self {
        self.abort_early = Some(value);
        self
    }

    pub fn with_allow_unknown(mut self, value: bool) -> Self {
        self.allow_unknown = Some(value);
        self
    }

    /// Layer `over` on top of `self`: every switch set in `over` replaces
    /// the corresponding one here; unset switches are kept.
    pub fn merge(&self, over: &ValidationOptions) -> ValidationOptions {
        ValidationOptions {
            abort_early: over.abort_early.or(self.abort_early),
            allow_unknown: over.allow_unknown.or(self.allow_unknown),
        }
    }

    /// Resolve against the baseline defaults, producing the record handed
    /// to schema evaluation. Never fails; no overrides yields the baseline
    /// unchanged.
    pub fn resolve(&self) -> EffectiveOptions {
        let base = EffectiveOptions::default();
        EffectiveOptions {
            abort_early: self.abort_early.unwrap_or(base.abort_early),
            allow_unknown: self.allow_unknown.unwrap_or(base.allow_unknown),
        }
    }
}

/// Fully-resolved options, as seen by a [`Schema`](crate::Schema) evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveOptions {
    pub abort_early: bool,
    pub allow_unknown: bool,
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        Self {
            abort_early: false,
            allow_unknown: false,
        }
    }
}
