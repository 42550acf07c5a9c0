//! Form configuration.
//!
//! Everything the host decides about a form instance is passed in at
//! construction through [`FormConfig`].

use crate::dropzone::AcceptPolicy;
use crate::models::FormValues;

/// Identifier used when the host has no preference.
pub const DEFAULT_FORM_ID: &str = "syncValidation";

/// Construction-time settings of one form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Unique identifier of the form among the host's forms.
    pub form_id: String,
    /// Type and arity policy of the picture drop zone.
    pub accept: AcceptPolicy,
    /// Values the form starts from and returns to on reset.
    pub initial_values: FormValues,
}

impl FormConfig {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            accept: AcceptPolicy::images(),
            initial_values: FormValues::default(),
        }
    }

    pub fn with_accept(mut self, accept: AcceptPolicy) -> Self {
        self.accept = accept;
        self
    }

    pub fn with_initial_values(mut self, values: FormValues) -> Self {
        self.initial_values = values;
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_ID)
    }
}
