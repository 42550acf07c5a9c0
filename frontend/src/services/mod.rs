//! Browser services.
//!
//! Thin wrappers over `web-sys` used by the components:
//!
//! # Services
//!
//! - [`files`] - `File`/`FileList`/`DragEvent` to core file handles
//! - [`object_url`] - Object URL factory for picture previews

pub mod files;
pub mod object_url;

pub use files::*;
pub use object_url::*;
