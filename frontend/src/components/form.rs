//! The submission form.
//!
//! Owns the [`FormState`] for its lifetime and hands the validated values
//! to the caller's submit handler.

use leptos::*;
use syncform::{Field, FormConfig, FormError, FormState, FormValues};

use crate::components::{DropzoneField, InputField, TextAreaField};

#[component]
pub fn SyncValidationForm(
    /// Form identifier, accept policy and initial values
    config: FormConfig,
    /// Called with the values of a valid submission
    #[prop(into)]
    on_submit: Callback<FormValues>,
) -> impl IntoView {
    let form = create_rw_signal(FormState::new(config));

    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(values)) => {
                on_submit.call(values);
                form.update(|f| f.end_submit());
            }
            Some(Err(FormError::Invalid(errors))) => {
                log::info!("Submission blocked, {} field(s) invalid", errors.len());
            }
            Some(Err(e)) => log::warn!("{}", e),
            None => log::error!("Form state disposed before submit"),
        }
    };

    let on_clear = move |_| {
        form.update(|f| f.reset());
    };

    let form_id = form.with_untracked(|f| f.form_id().to_string());

    view! {
        <div class="grid">
            <div class="row text-left">
                <div class="panel">
                    <form id=form_id on:submit=on_form_submit>
                        <InputField form=form field=Field::Name label="Name"/>
                        <InputField form=form field=Field::Description label="Description"/>
                        <InputField form=form field=Field::Url label="Url"/>
                        <TextAreaField
                            form=form
                            field=Field::About
                            label="Content"
                            placeholder="write about the project"
                        />
                        <DropzoneField form=form/>

                        <div class="text-center">
                            <button
                                class="btn btn-primary"
                                type="submit"
                                disabled=move || form.with(|f| f.is_submitting())
                            >
                                "Submit"
                            </button>
                            <button
                                class="btn btn-danger"
                                type="button"
                                disabled=move || !form.with(|f| f.can_reset())
                                on:click=on_clear
                            >
                                "Clear Values"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
