//! Footer component

use leptos::*;

use crate::{APP_NAME, APP_VERSION};

#[component]
pub fn Footer(
    /// Identifier of the form rendered on the page
    #[prop(into)]
    form_id: String,
) -> impl IntoView {
    view! {
        <footer>
            <div>
                {APP_NAME} " v" {APP_VERSION} " • form " <code>{form_id}</code>
            </div>
            <div class="footer-note">
                "Submitted values stay in this page; nothing is uploaded."
            </div>
        </footer>
    }
}
