//! Editable List Component
//!
//! Ordered list of short strings, rendered as chips for visitors. In edit
//! mode the whole list is edited at once: add, remove by index, edit per
//! item. Blank entries are filtered out before the save is committed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::SaveCallback;
use crate::fields::clean_list;
use crate::session::use_session;

#[component]
pub fn EditableList(
    /// Last committed items from the page's record
    #[prop(into)]
    items: Signal<Vec<String>>,
    on_save: SaveCallback<Vec<String>>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let session = use_session();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(Vec::<String>::new());
    let (saving, set_saving) = signal(false);

    let begin_edit = move |_| {
        if !session.edit_mode.get_untracked() {
            return;
        }
        set_draft.set(items.get_untracked());
        set_editing.set(true);
    };

    let add_entry = move |_| {
        set_draft.update(|entries| entries.push(String::new()));
    };

    let remove_entry = move |index: usize| {
        set_draft.update(|entries| {
            if index < entries.len() {
                entries.remove(index);
            }
        });
    };

    let update_entry = move |index: usize, text: String| {
        set_draft.update(|entries| {
            if let Some(entry) = entries.get_mut(index) {
                *entry = text;
            }
        });
    };

    let commit = {
        let on_save = on_save.clone();
        move || {
            if saving.get_untracked() {
                return;
            }
            let cleaned = clean_list(draft.get_untracked());
            let on_save = on_save.clone();
            set_saving.set(true);
            spawn_local(async move {
                let ok = on_save.run(cleaned).await;
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
                let commit = commit.clone();
                view! {
                    <div class="editable-list editing">
                        <For
                            each=move || (0..draft.get().len())
                            key=|index| *index
                            children=move |index| {
                                view! {
                                    <div class="list-entry-row">
                                        <input
                                            type="text"
                                            class="list-entry-input"
                                            placeholder=placeholder
                                            prop:value=move || draft.get().get(index).cloned().unwrap_or_default()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                update_entry(index, input.value());
                                            }
                                        />
                                        <button class="remove-entry-btn" on:click=move |_| remove_entry(index)>"×"</button>
                                    </div>
                                }
                            }
                        />
                        <div class="editor-actions">
                            <button class="add-entry-btn" on:click=add_entry>"+ Ajouter"</button>
                            <button
                                class="save-btn"
                                disabled=move || saving.get()
                                on:click=move |_| commit()
                            >
                                {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                            </button>
                            <button class="cancel-btn" on:click=move |_| set_editing.set(false)>"Annuler"</button>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                let entries = items.get();
                let can_edit = session.edit_mode.get();
                let class = if can_edit { "editable-list editable" } else { "editable-list" };
                view! {
                    <div class=class on:click=begin_edit>
                        {entries
                            .into_iter()
                            .map(|entry| view! { <span class="chip">{entry}</span> })
                            .collect_view()}
                        <Show when=move || can_edit && items.get().is_empty()>
                            <span class="chip empty">{placeholder}</span>
                        </Show>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
