//! # SyncForm - validated submission form core
//!
//! UI-independent logic behind the SyncForm frontend: field validation,
//! drag & drop file capture, preview URL lifetimes and form state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  change/blur  ┌─────────────┐  validate   ┌─────────────┐
//! │   UI event  │──────────────▶│  FormState  │────────────▶│ FieldErrors │
//! └─────────────┘               └─────────────┘             └─────────────┘
//!        │ drag/drop                   ▲ commit_files
//!        ▼                             │
//! ┌─────────────┐  DropOutcome  ───────┘          ┌─────────────┐
//! │  DropZone   │────────────────────────────────▶│ PreviewSet  │
//! └─────────────┘                                 └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Fields, values, file handles, errors map
//! - [`validation`] - Per-field rules
//! - [`dropzone`] - Drop surface state machine and accept policy
//! - [`preview`] - Paired acquisition/release of preview URLs
//! - [`form`] - Host form state (touched, pristine, submitting)
//! - [`config`] - Construction-time settings

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Logic
pub mod dropzone;
pub mod form;
pub mod preview;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{FormConfig, DEFAULT_FORM_ID};

pub use error::{FormError, FormResult, PreviewError, PreviewResult, RejectReason};

pub use models::{Field, FieldErrors, FieldValue, FileHandle, FileId, FormValues, ValueKind};

pub use validation::{validate, validate_text};

pub use dropzone::{
    carries_files, AcceptPolicy, DragItem, DragState, DragVerdict, DropEvent, DropOutcome, DropZone, Rejection,
};

pub use preview::{ObjectUrls, PreviewSet, Thumbnail};

pub use form::FormState;
