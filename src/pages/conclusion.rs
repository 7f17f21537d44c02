//! Conclusion Page
//!
//! Owns the "conclusion" content section: a title and a free-text block.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SectionKey};
use crate::components::{EditableText, SaveCallback};
use crate::models::{ContentSection, ToastKind};
use crate::store::{push_toast, use_app_store, AppStore};

const SECTION_ID: &str = "conclusion";

async fn persist(section: ContentSection, set_reload: WriteSignal<u32>, store: AppStore) -> bool {
    let payload = match serde_json::to_value(&section) {
        Ok(payload) => payload,
        Err(_) => return false,
    };
    let ok = api::save(&SectionKey::Content(SECTION_ID.to_string()), payload).await;
    if ok {
        push_toast(&store, ToastKind::Success, "Modifications enregistrées");
        set_reload.try_update(|version| *version += 1);
    } else {
        push_toast(&store, ToastKind::Error, "Échec de l'enregistrement");
    }
    ok
}

fn text_saver(
    record: ReadSignal<Option<ContentSection>>,
    set_reload: WriteSignal<u32>,
    store: AppStore,
    apply: fn(&mut ContentSection, String),
) -> SaveCallback<String> {
    SaveCallback::new(move |value: String| async move {
        let Some(mut section) = record.try_get_untracked().flatten() else {
            return false;
        };
        apply(&mut section, value);
        persist(section, set_reload, store).await
    })
}

#[component]
pub fn ConclusionPage() -> impl IntoView {
    let store = use_app_store();

    let (record, set_record) = signal::<Option<ContentSection>>(None);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::fetch_section(SECTION_ID).await {
                Ok(section) => {
                    set_record.try_set(Some(section));
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[CONCLUSION] fetch failed: {}", err).into());
                    if record.try_get_untracked() == Some(None) {
                        set_record.try_set(Some(ContentSection::placeholder(SECTION_ID)));
                    }
                }
            }
        });
    });

    let title = Signal::derive(move || record.get().map(|s| s.title).unwrap_or_default());
    let content = Signal::derive(move || record.get().map(|s| s.content).unwrap_or_default());

    let save_title = text_saver(record, set_reload, store, |section, v| section.title = v);
    let save_content = text_saver(record, set_reload, store, |section, v| section.content = v);

    view! {
        <div class="page conclusion-page">
            <Show
                when=move || record.get().is_some()
                fallback=|| view! { <p class="loading">"Chargement..."</p> }
            >
                <h1 class="page-title">
                    <EditableText
                        value=title
                        on_save=save_title.clone()
                        placeholder="Conclusion & Perspectives"
                    />
                </h1>
                <div class="card">
                    <h2 class="section-heading">"Bilan de parcours"</h2>
                    <EditableText
                        value=content
                        on_save=save_content.clone()
                        placeholder="Votre bilan..."
                        multiline=true
                    />
                </div>
            </Show>
        </div>
    }
}
