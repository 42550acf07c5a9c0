//! UI Components for the SyncForm application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Form Components
//! - [`SyncValidationForm`] - The validated submission form
//! - [`InputField`] / [`TextAreaField`] - Labeled text fields
//! - [`DropzoneField`] - Picture drop zone with previews
//! - [`SubmittedValues`] - Values received by the demo submit handler

mod hero;
mod footer;
mod field;
mod dropzone;
mod form;
mod submitted;

pub use hero::*;
pub use footer::*;
pub use field::*;
pub use dropzone::*;
pub use form::*;
pub use submitted::*;
