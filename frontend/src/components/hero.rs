//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Project Submission"</h1>
            <p class="subtitle">
                "Describe your project and attach one or more pictures. "
                "Every field is required; errors appear once you leave a field."
            </p>
        </div>
    }
}
