//! Picture field with drag & drop support.
//!
//! The drop surface reflects the drag state (neutral, accept, reject);
//! a drop or a browse selection replaces the picture list. Previews use
//! object URLs that are revoked as soon as their file leaves the list or
//! the component unmounts.

use std::collections::HashMap;

use leptos::*;
use syncform::{carries_files, DragState, DropEvent, DropZone, Field, FileHandle, FileId, FormState, PreviewSet, Thumbnail};
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::{drag_items, drag_types, dropped_files, files_from_list, BrowserObjectUrls};

fn surface_class(state: DragState) -> &'static str {
    match state {
        DragState::Idle => "dropzone",
        DragState::DragOverAccept => "dropzone dropzone-accept",
        DragState::DragOverReject => "dropzone dropzone-reject",
    }
}

#[component]
pub fn DropzoneField(form: RwSignal<FormState>) -> impl IntoView {
    let policy = form.with_untracked(|f| f.config().accept.clone());
    let accept = policy.accept_attr();
    let multiple = policy.is_multiple();

    let zone = create_rw_signal(DropZone::new(policy));
    let drag_state = create_memo(move |_| zone.with(|z| z.state()));

    // Browser files of the committed list, by handle identity
    let blobs = store_value(HashMap::<FileId, File>::new());
    let previews = store_value(PreviewSet::new(BrowserObjectUrls));
    let (thumbnails, set_thumbnails) = create_signal(Vec::<Thumbnail>::new());
    let input_ref = create_node_ref::<html::Input>();

    let commit = move |to_event: fn(Vec<FileHandle>) -> DropEvent, files: Vec<(FileHandle, File)>| {
        let handles = files.iter().map(|(handle, _)| handle.clone()).collect();
        let Some(outcome) = zone.try_update(|z| z.handle(to_event(handles))).flatten() else {
            return;
        };
        for rejection in &outcome.rejected {
            log::warn!("Rejected '{}': {}", rejection.file.name, rejection.reason);
        }
        blobs.update_value(|store| {
            store.clear();
            store.extend(
                files
                    .into_iter()
                    .filter(|(handle, _)| outcome.accepted.contains(handle))
                    .map(|(handle, file)| (handle.id(), file)),
            );
        });
        log::info!("📎 {} picture(s) selected", outcome.accepted.len());
        form.update(|f| f.commit_files(outcome.accepted));
    };

    // Previews follow the committed value, including resets
    let picture = create_memo(move |_| form.with(|f| f.values().picture.clone()));
    create_effect(move |_| {
        let files = picture.get();
        blobs.update_value(|store| store.retain(|id, _| files.iter().any(|h| h.id() == *id)));
        let thumbs = blobs.with_value(|store| {
            previews.try_update_value(|set| {
                set.sync(files.iter().filter_map(|h| store.get(&h.id()).map(|file| (h, file))))
            })
        });
        set_thumbnails.set(thumbs.unwrap_or_default());
    });

    on_cleanup(move || {
        previews.try_update_value(|set| set.clear());
    });

    // Drags without files (text, links) are left to the browser
    let on_drag_enter = move |ev: DragEvent| {
        let (types, items) = (drag_types(&ev), drag_items(&ev));
        let Some(verdict) = zone.with_untracked(|z| z.verdict_for(&types, &items)) else {
            return;
        };
        ev.prevent_default();
        zone.update(|z| {
            z.handle(DropEvent::DragEnter(verdict));
        });
    };

    let on_drag_over = move |ev: DragEvent| {
        let (types, items) = (drag_types(&ev), drag_items(&ev));
        let Some(verdict) = zone.with_untracked(|z| z.verdict_for(&types, &items)) else {
            return;
        };
        ev.prevent_default();
        // dragover fires continuously; only write when the state changes
        if zone.with_untracked(|z| z.state()) != DragState::from(verdict) {
            zone.update(|z| {
                z.handle(DropEvent::DragOver(verdict));
            });
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        if !carries_files(&drag_types(&ev)) {
            return;
        }
        zone.update(|z| {
            z.handle(DropEvent::DragLeave);
        });
    };

    let on_drop = move |ev: DragEvent| {
        if !carries_files(&drag_types(&ev)) {
            return;
        }
        ev.prevent_default();
        commit(DropEvent::Drop, dropped_files(&ev));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            commit(DropEvent::BrowseSelect, files_from_list(&list));
        }
        // Allow selecting the same file again
        input.set_value("");
    };

    let open_file_dialog = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let error = move || form.with(|f| f.visible_error(Field::Picture));

    view! {
        <div class="text-center">
            <div
                class=move || surface_class(drag_state.get())
                on:click=open_file_dialog
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    name=Field::Picture.as_str()
                    accept=accept
                    multiple=multiple
                    style="display:none"
                    node_ref=input_ref
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
                <div>
                    {move || if drag_state.get() == DragState::DragOverAccept { "Drop" } else { "Drag" }}
                    " files here..."
                </div>
                <Show
                    when=move || drag_state.get() == DragState::DragOverReject
                    fallback=|| view! { }
                >
                    <div>"Unsupported file type..."</div>
                </Show>
            </div>

            <Show
                when=move || error().is_some()
                fallback=|| view! { }
            >
                <span class="error">{move || error().unwrap_or_default()}</span>
            </Show>

            <aside class="thumbs">
                <For
                    each=move || thumbnails.get()
                    key=|thumb| thumb.render_key()
                    children=move |thumb| {
                        view! {
                            <div class="thumb">
                                <div class="thumb-inner">
                                    <img src=thumb.url alt=thumb.name/>
                                </div>
                            </div>
                        }
                    }
                />
            </aside>
        </div>
    }
}
