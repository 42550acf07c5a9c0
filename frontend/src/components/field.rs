//! Labeled text inputs bound to the form state.

use leptos::*;
use syncform::{Field, FormState};

use crate::{ABOUT_COLS, ABOUT_ROWS};

fn on_text_change(form: RwSignal<FormState>, field: Field, value: String) {
    form.update(|f| {
        if let Err(e) = f.change_text(field, value) {
            log::warn!("{}", e);
        }
    });
}

/// Error message of a field, shown once it has been touched.
#[component]
fn FieldError(form: RwSignal<FormState>, field: Field) -> impl IntoView {
    let error = move || form.with(|f| f.visible_error(field));

    view! {
        <Show
            when=move || error().is_some()
            fallback=|| view! { }
        >
            <span class="error">{move || error().unwrap_or_default()}</span>
        </Show>
    }
}

/// Single-line input with label.
#[component]
pub fn InputField(
    form: RwSignal<FormState>,
    field: Field,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.values().text(field).unwrap_or_default().to_string());
    let placeholder = label.clone();

    view! {
        <div class="form-group">
            <label class="control-label" for=field.as_str()>{label}</label>
            <div>
                <input
                    class="form-control"
                    id=field.as_str()
                    name=field.as_str()
                    type=input_type
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| on_text_change(form, field, event_target_value(&ev))
                    on:blur=move |_| form.update(|f| f.blur(field))
                />
                <FieldError form=form field=field/>
            </div>
        </div>
    }
}

/// Multi-line input with label.
#[component]
pub fn TextAreaField(
    form: RwSignal<FormState>,
    field: Field,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let value = move || form.with(|f| f.values().text(field).unwrap_or_default().to_string());

    view! {
        <div class="form-group">
            <label class="control-label" for=field.as_str()>{label}</label>
            <div>
                <textarea
                    class="form-control"
                    id=field.as_str()
                    name=field.as_str()
                    placeholder=placeholder
                    rows=ABOUT_ROWS
                    cols=ABOUT_COLS
                    prop:value=value
                    on:input=move |ev| on_text_change(form, field, event_target_value(&ev))
                    on:blur=move |_| form.update(|f| f.blur(field))
                ></textarea>
                <FieldError form=form field=field/>
            </div>
        </div>
    }
}
