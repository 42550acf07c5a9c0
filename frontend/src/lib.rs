//! SyncForm - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend rendering a validated project submission form
//! with drag & drop picture upload.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── SyncValidationForm                                     │
//! │  │   ├── InputField x3, TextAreaField                       │
//! │  │   └── DropzoneField (drop surface + thumbnails)          │
//! │  └── SubmittedValues (after a valid submit)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - UI types (SubmissionRecord)
//! - [`components`] - UI components (form, fields, drop zone, etc.)
//! - [`services`] - Browser wrappers (files, object URLs)
//!
//! Validation, drag state and form state live in the `syncform` crate.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::SubmissionRecord;

// Components
pub use components::*;

// Services
pub use services::*;

use syncform::FormValues;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Start the application. Exported so a JS loader can call it directly.
#[wasm_bindgen]
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 SyncForm - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (submissions, set_submissions) = create_signal(Vec::<SubmissionRecord>::new());
    let next_sequence = store_value(1usize);

    let config = form_config();
    let form_id = config.form_id.clone();
    let footer_form_id = form_id.clone();

    // Demo submit handler: record the values and show them
    let on_submit = move |values: FormValues| {
        let sequence = next_sequence.get_value();
        next_sequence.set_value(sequence + 1);

        match SubmissionRecord::new(sequence, &form_id, &values) {
            Ok(record) => {
                log::info!("✅ Submission #{} received from '{}'", sequence, form_id);
                set_submissions.update(|records| {
                    records.push(record);
                    if records.len() > MAX_SUBMISSIONS {
                        records.remove(0);
                    }
                });
            }
            Err(e) => log::error!("❌ Could not serialize submission: {}", e),
        }
    };

    view! {
        <div class="container">
            <Hero/>

            <SyncValidationForm config=config on_submit=on_submit/>

            <Show
                when=move || !submissions.get().is_empty()
                fallback=|| view! { }
            >
                <SubmittedValues submissions=submissions set_submissions=set_submissions/>
            </Show>
        </div>

        <Footer form_id=footer_form_id/>
    }
}
