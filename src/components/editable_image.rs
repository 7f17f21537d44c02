//! Editable Image Component
//!
//! Visitors see the image, or nothing at all when the slot is empty.
//! In edit mode an empty slot becomes a labelled placeholder box; clicking
//! opens a file picker. The picked file is validated as an image, encoded
//! to a data URL entirely client-side and handed to the save callback.
//! Display size is computed from the natural aspect ratio so logos,
//! screenshots and portrait photos are not forced into one fixed frame.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::SaveCallback;
use crate::fields::fit_box;
use crate::session::use_session;

/// Shortest edge an image is allowed to shrink to
const MIN_EDGE_PX: f64 = 48.0;

#[component]
pub fn EditableImage(
    /// Image reference (data URL) or empty when the slot is unset
    #[prop(into)]
    src: Signal<String>,
    on_save: SaveCallback<String>,
    /// Label shown inside the empty placeholder box
    #[prop(optional)] label: &'static str,
    #[prop(default = 320.0)] max_width: f64,
    #[prop(default = 240.0)] max_height: f64,
) -> impl IntoView {
    let session = use_session();

    let (uploading, set_uploading) = signal(false);
    let (display_size, set_display_size) = signal::<Option<(f64, f64)>>(None);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let pick_file = move || {
        if !session.edit_mode.get_untracked() || uploading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_change = {
        let on_save = on_save.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().clone();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow re-picking the same file later
            input.set_value("");

            if !file.type_().starts_with("image/") {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Veuillez sélectionner un fichier image.");
                }
                return;
            }

            set_uploading.set(true);
            let on_save = on_save.clone();
            let reader = match web_sys::FileReader::new() {
                Ok(reader) => reader,
                Err(_) => {
                    set_uploading.set(false);
                    return;
                }
            };
            let reader_for_load = reader.clone();
            let onload = Closure::once(move |_: web_sys::ProgressEvent| {
                let encoded = reader_for_load
                    .result()
                    .ok()
                    .and_then(|value| value.as_string())
                    .unwrap_or_default();
                spawn_local(async move {
                    if !encoded.is_empty() {
                        let _ = on_save.run(encoded).await;
                    }
                    set_uploading.try_set(false);
                });
            });
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
            if reader.read_as_data_url(&file).is_err() {
                set_uploading.set(false);
            }
        }
    };

    let on_image_load = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let image = target.dyn_ref::<web_sys::HtmlImageElement>().unwrap();
        let (width, height) = fit_box(
            image.natural_width() as f64,
            image.natural_height() as f64,
            max_width,
            max_height,
            MIN_EDGE_PX,
        );
        set_display_size.set(Some((width, height)));
    };

    let image_style = move || {
        display_size
            .get()
            .map(|(width, height)| format!("width: {:.0}px; height: {:.0}px;", width, height))
            .unwrap_or_default()
    };

    let on_save_clear = on_save.clone();

    view! {
        <div class="editable-image">
            <input
                type="file"
                accept="image/*"
                style="display: none;"
                node_ref=input_ref
                on:change=on_file_change
            />
            {move || {
                let current = src.get();
                let can_edit = session.edit_mode.get();
                if !current.is_empty() {
                    let on_clear = {
                        let on_save = on_save_clear.clone();
                        move |_| {
                            let on_save = on_save.clone();
                            spawn_local(async move {
                                let _ = on_save.run(String::new()).await;
                            });
                        }
                    };
                    view! {
                        <div class="image-frame">
                            <img
                                src=current
                                class=move || {
                                    if session.edit_mode.get() { "portfolio-image editable" } else { "portfolio-image" }
                                }
                                style=image_style
                                on:load=on_image_load
                                on:click=move |_| pick_file()
                            />
                            <Show when=move || session.edit_mode.get()>
                                <button class="clear-image-btn" title="Supprimer l'image" on:click=on_clear.clone()>"×"</button>
                            </Show>
                            <Show when=move || uploading.get()>
                                <span class="saving-hint overlay">"Envoi en cours..."</span>
                            </Show>
                        </div>
                    }
                    .into_any()
                } else if can_edit {
                    view! {
                        <div class="image-placeholder" on:click=move |_| pick_file()>
                            <span class="placeholder-label">
                                {move || if uploading.get() { "Envoi en cours...".to_string() } else { label.to_string() }}
                            </span>
                        </div>
                    }
                    .into_any()
                } else {
                    // Empty slot: show nothing to visitors
                    ().into_any()
                }
            }}
        </div>
    }
}
