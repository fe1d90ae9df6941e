use std::collections::BTreeSet;

use crate::field::Field;
use crate::submit::SubmitOutcome;
use crate::validation::ValidationErrorSet;
use crate::values::FormValues;

/// Snapshot of everything the form tracks.
///
/// Observers receive a reference to this after every mutation; the form is
/// the only writer.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub(crate) values: FormValues,
    pub(crate) defaults: FormValues,
    pub(crate) touched: BTreeSet<Field>,
    pub(crate) errors: ValidationErrorSet,
    pub(crate) submitting: bool,
    pub(crate) submit_count: u32,
    pub(crate) outcome: Option<SubmitOutcome>,
}

impl FormState {
    pub(crate) fn with_defaults(defaults: FormValues) -> Self {
        Self {
            values: defaults.clone(),
            defaults,
            ..Default::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Whether the value differs from its default.
    pub fn is_dirty(&self, field: Field) -> bool {
        self.values.get(field) != self.defaults.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Number of submit attempts, valid or not.
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Whether at least one submit attempt was made.
    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// How the last submission callback settled, if one did since the last
    /// submit attempt.
    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }
}
