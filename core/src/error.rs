//! Error types for the SyncForm core.
//!
//! Field validation failures are not errors in this sense: they are plain
//! messages collected in [`crate::FieldErrors`]. The types here cover the
//! programmatic failures around them:
//!
//! - [`FormError`] - Misuse of the form-state update entry point, submit gate
//! - [`PreviewError`] - Preview URL acquisition failures
//! - [`RejectReason`] - Why the drop zone refused a file

use thiserror::Error;

use crate::models::{Field, FieldErrors, ValueKind};

// =============================================================================
// Form Errors
// =============================================================================

/// Errors returned by [`crate::FormState`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A value of the wrong kind was written to a field.
    #[error("Field '{field}' expects a {expected} value")]
    WrongValueKind { field: Field, expected: ValueKind },

    /// Submission refused because at least one field fails validation.
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    /// A submission is already in flight.
    #[error("Form is already submitting")]
    AlreadySubmitting,
}

// =============================================================================
// Preview Errors
// =============================================================================

/// Errors while acquiring a preview URL for a file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreviewError {
    /// The URL factory refused to create a URL.
    #[error("Failed to create preview URL for '{name}': {message}")]
    CreateFailed { name: String, message: String },
}

// =============================================================================
// Drop Rejections
// =============================================================================

/// Reason a dropped or selected file was not committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// MIME type and extension both miss the accept list.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// File exceeds the configured maximum size.
    #[error("File is too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },

    /// Several files offered to a single-file drop zone.
    #[error("Too many files")]
    TooManyFiles,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for form-state operations.
pub type FormResult<T> = Result<T, FormError>;

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;
