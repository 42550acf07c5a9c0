//! Form state owned by the host.
//!
//! [`FormState`] holds the current [`FormValues`] together with the
//! touched set and the submitting flag. All mutations go through
//! [`FormState::change`]; validation is recomputed from the current
//! snapshot on every read so it can never go stale.
//!
//! # Lifecycle
//!
//! ```text
//! change/blur ──▶ errors() ──▶ visible_error() (touched fields only)
//!       │
//!       ▼
//! begin_submit() ── Err(Invalid) ──▶ every field touched, errors shown
//!       │
//!       ▼ Ok(values)
//! submit handler ──▶ end_submit()
//! ```

use std::collections::BTreeSet;

use crate::config::FormConfig;
use crate::error::{FormError, FormResult};
use crate::models::{Field, FieldErrors, FieldValue, FileHandle, FormValues};
use crate::validation::validate;

/// Values and interaction metadata of one form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    config: FormConfig,
    values: FormValues,
    touched: BTreeSet<Field>,
    submitting: bool,
}

impl FormState {
    pub fn new(config: FormConfig) -> Self {
        let values = config.initial_values.clone();
        Self {
            config,
            values,
            touched: BTreeSet::new(),
            submitting: false,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn form_id(&self) -> &str {
        &self.config.form_id
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Validation result for the current values.
    pub fn errors(&self) -> FieldErrors {
        validate(&self.values)
    }

    /// Single update entry point.
    pub fn change(&mut self, field: Field, value: FieldValue) -> FormResult<()> {
        self.values
            .set(field, value)
            .map_err(|expected| FormError::WrongValueKind { field, expected })
    }

    pub fn change_text(&mut self, field: Field, text: impl Into<String>) -> FormResult<()> {
        self.change(field, FieldValue::Text(text.into()))
    }

    /// Replace the picture list with a committed drop.
    ///
    /// A commit counts as an interaction, so the field becomes touched.
    pub fn commit_files(&mut self, files: Vec<FileHandle>) {
        if let Err(e) = self.change(Field::Picture, FieldValue::Files(files)) {
            log::error!("{}", e);
            return;
        }
        self.touched.insert(Field::Picture);
    }

    /// Mark a field as having lost focus.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display for `field`: only once it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field).map(str::to_owned)
    }

    /// No field differs from the initial values.
    pub fn is_pristine(&self) -> bool {
        self.values == self.config.initial_values
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// "Clear" is offered only with unsaved changes and no submission in flight.
    pub fn can_reset(&self) -> bool {
        !self.is_pristine() && !self.submitting
    }

    /// Restore the initial values and forget interactions.
    pub fn reset(&mut self) {
        self.values = self.config.initial_values.clone();
        self.touched.clear();
        log::debug!("Form '{}' reset", self.config.form_id);
    }

    /// Start a submission.
    ///
    /// Touches every field so all errors become visible. On success the
    /// form is marked submitting and the values snapshot is returned for the
    /// submit handler; call [`FormState::end_submit`] once it is done.
    pub fn begin_submit(&mut self) -> FormResult<FormValues> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.touch_all();

        let errors = self.errors();
        if !errors.is_empty() {
            log::debug!(
                "Form '{}' not submitted: {} invalid field(s)",
                self.config.form_id,
                errors.len()
            );
            return Err(FormError::Invalid(errors));
        }

        self.submitting = true;
        log::info!("Form '{}' submitting", self.config.form_id);
        Ok(self.values.clone())
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }
}
