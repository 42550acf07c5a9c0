//! Application configuration.
//!
//! UI constants of the demo page and the [`FormConfig`] it mounts the
//! submission form with.

use syncform::{AcceptPolicy, FormConfig, DEFAULT_FORM_ID};

/// Application name.
///
/// Used as the document title and in the footer.
pub const APP_NAME: &str = "SyncForm";

/// Maximum picture size (in bytes).
///
/// 10 MB limit.
pub const MAX_PICTURE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum submissions kept in the results panel.
pub const MAX_SUBMISSIONS: usize = 20;

/// Crate version shown in the footer.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows of the "about" textarea.
pub const ABOUT_ROWS: u32 = 10;

/// Columns of the "about" textarea.
pub const ABOUT_COLS: u32 = 40;

/// Settings of the demo form.
pub fn form_config() -> FormConfig {
    FormConfig::new(DEFAULT_FORM_ID)
        .with_accept(AcceptPolicy::images().max_size(MAX_PICTURE_SIZE))
}
