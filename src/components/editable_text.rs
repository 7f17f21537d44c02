//! Editable Text Component
//!
//! Renders plain text for visitors and a click-to-edit inline editor in
//! edit mode. Enter commits (single line), Escape cancels; multiline
//! fields commit through an explicit save button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::SaveCallback;
use crate::fields::clean_text;
use crate::session::use_session;

#[component]
pub fn EditableText(
    /// Last committed value from the page's record
    #[prop(into)]
    value: Signal<String>,
    on_save: SaveCallback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let session = use_session();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let begin_edit = move |_| {
        if !session.edit_mode.get_untracked() {
            return;
        }
        set_draft.set(value.get_untracked());
        set_editing.set(true);
    };

    let cancel = move || {
        set_editing.set(false);
    };

    // Whitespace-only input is rejected before any gateway call; the
    // editor stays open when the container reports a failed save.
    let commit = {
        let on_save = on_save.clone();
        move || {
            if saving.get_untracked() {
                return;
            }
            let Some(text) = clean_text(&draft.get_untracked()) else {
                return;
            };
            let on_save = on_save.clone();
            set_saving.set(true);
            spawn_local(async move {
                let ok = on_save.run(text).await;
                set_saving.try_set(false);
                if ok {
                    set_editing.try_set(false);
                }
            });
        }
    };

    view! {
        {move || {
            if editing.get() {
                let commit_on_key = commit.clone();
                let commit_on_click = commit.clone();
                if multiline {
                    view! {
                        <div class="editable-text editing">
                            <textarea
                                class="inline-editor multiline"
                                placeholder=placeholder
                                prop:value=move || draft.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_draft.set(textarea.value());
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Escape" {
                                        cancel();
                                    }
                                }
                            ></textarea>
                            <div class="editor-actions">
                                <button
                                    class="save-btn"
                                    disabled=move || saving.get()
                                    on:click=move |_| commit_on_click()
                                >
                                    {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                                </button>
                                <button class="cancel-btn" on:click=move |_| cancel()>"Annuler"</button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="editable-text editing">
                            <input
                                type="text"
                                class="inline-editor"
                                placeholder=placeholder
                                prop:value=move || draft.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_draft.set(input.value());
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        commit_on_key();
                                    } else if ev.key() == "Escape" {
                                        cancel();
                                    }
                                }
                            />
                            <Show when=move || saving.get()>
                                <span class="saving-hint">"Enregistrement..."</span>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            } else {
                let text = value.get();
                let can_edit = session.edit_mode.get();
                let shown = if text.is_empty() && can_edit {
                    placeholder.to_string()
                } else {
                    text
                };
                let class = if can_edit { "editable-text editable" } else { "editable-text" };
                view! {
                    <span class=class on:click=begin_edit>{shown}</span>
                }
                .into_any()
            }
        }}
    }
}
