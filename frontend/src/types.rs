//! Common types used across the frontend application.
//!
//! Domain types (values, errors, file handles) come from the `syncform`
//! core crate; this module only holds what is specific to the UI.

use serde::Serialize;
use syncform::FormValues;

// =============================================================================
// Submission Types
// =============================================================================

/// A submission received by the demo submit handler.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Position in the session, starting at 1
    pub sequence: usize,
    /// Form that produced the values
    pub form_id: String,
    /// Local time of submission (HH:MM:SS)
    pub submitted_at: String,
    /// Submitted values, pretty-printed JSON
    pub values_json: String,
}

impl SubmissionRecord {
    /// Capture submitted values at the current local time.
    pub fn new(sequence: usize, form_id: &str, values: &FormValues) -> serde_json::Result<Self> {
        Ok(Self {
            sequence,
            form_id: form_id.to_string(),
            submitted_at: chrono::Local::now().format("%H:%M:%S").to_string(),
            values_json: values.to_json_pretty()?,
        })
    }
}
