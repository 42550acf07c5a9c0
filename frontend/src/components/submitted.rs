//! Panel listing the values received by the demo submit handler.

use leptos::*;

use crate::SubmissionRecord;

/// Submitted values panel (display only, submissions are recorded by the app).
#[component]
pub fn SubmittedValues(
    /// Recorded submissions, oldest first
    submissions: ReadSignal<Vec<SubmissionRecord>>,
    /// Setter used by the clear button
    set_submissions: WriteSignal<Vec<SubmissionRecord>>,
) -> impl IntoView {
    view! {
        <div class="results-panel">
            <div class="results-header">
                <span class="results-title">"📋 Submitted Values"</span>
                <button
                    class="results-clear"
                    on:click=move |_| set_submissions.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="results-content">
                <For
                    each=move || submissions.get().into_iter().rev()
                    key=|record| record.sequence
                    children=move |record| {
                        view! {
                            <div class="result-entry">
                                <span class="result-time">
                                    "#" {record.sequence} " [" {record.submitted_at.clone()} "] " {record.form_id.clone()}
                                </span>
                                <pre>{record.values_json.clone()}</pre>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
