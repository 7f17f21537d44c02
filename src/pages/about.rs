//! About Page
//!
//! Owns the personal-info singleton: profile text, skills, contact
//! details and a portrait photo, all inline-editable in admin mode.
//! Also carries the visitor contact form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, SectionKey};
use crate::components::{EditableImage, EditableList, EditableText, SaveCallback};
use crate::models::{ContactForm, PersonalInfo, ToastKind};
use crate::store::{push_toast, use_app_store, AppStore};

type RecordSignal = ReadSignal<Option<PersonalInfo>>;

/// Persist the merged record, toast the outcome, refetch on success
async fn persist(info: PersonalInfo, set_reload: WriteSignal<u32>, store: AppStore) -> bool {
    let payload = match serde_json::to_value(&info) {
        Ok(payload) => payload,
        Err(_) => return false,
    };
    let ok = api::save(&SectionKey::Personal, payload).await;
    if ok {
        push_toast(&store, ToastKind::Success, "Modifications enregistrées");
        set_reload.try_update(|version| *version += 1);
    } else {
        push_toast(&store, ToastKind::Error, "Échec de l'enregistrement");
    }
    ok
}

fn text_saver(
    record: RecordSignal,
    set_reload: WriteSignal<u32>,
    store: AppStore,
    apply: fn(&mut PersonalInfo, String),
) -> SaveCallback<String> {
    SaveCallback::new(move |value: String| async move {
        let Some(mut info) = record.try_get_untracked().flatten() else {
            return false;
        };
        apply(&mut info, value);
        persist(info, set_reload, store).await
    })
}

fn list_saver(
    record: RecordSignal,
    set_reload: WriteSignal<u32>,
    store: AppStore,
    apply: fn(&mut PersonalInfo, Vec<String>),
) -> SaveCallback<Vec<String>> {
    SaveCallback::new(move |values: Vec<String>| async move {
        let Some(mut info) = record.try_get_untracked().flatten() else {
            return false;
        };
        apply(&mut info, values);
        persist(info, set_reload, store).await
    })
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let store = use_app_store();

    let (record, set_record) = signal::<Option<PersonalInfo>>(None);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::fetch_personal_info().await {
                Ok(info) => {
                    set_record.try_set(Some(info));
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[ABOUT] fetch failed: {}", err).into());
                    // Placeholder only on the initial load; a failed refetch
                    // keeps the last known snapshot.
                    if record.try_get_untracked() == Some(None) {
                        set_record.try_set(Some(PersonalInfo::placeholder()));
                    }
                }
            }
        });
    });

    let field = move |get: fn(&PersonalInfo) -> String| {
        Signal::derive(move || record.get().map(|info| get(&info)).unwrap_or_default())
    };
    let skills = Signal::derive(move || record.get().map(|info| info.skills).unwrap_or_default());

    let save_name = text_saver(record, set_reload, store, |info, v| info.name = v);
    let save_headline = text_saver(record, set_reload, store, |info, v| info.headline = v);
    let save_profile = text_saver(record, set_reload, store, |info, v| info.profile = v);
    let save_email = text_saver(record, set_reload, store, |info, v| info.email = v);
    let save_phone = text_saver(record, set_reload, store, |info, v| info.phone = v);
    let save_linkedin = text_saver(record, set_reload, store, |info, v| info.linkedin = v);
    let save_photo = text_saver(record, set_reload, store, |info, v| info.photo = v);
    let save_skills = list_saver(record, set_reload, store, |info, v| info.skills = v);

    view! {
        <div class="page about-page">
            <h1 class="page-title">"À propos de moi"</h1>

            <Show
                when=move || record.get().is_some()
                fallback=|| view! { <p class="loading">"Chargement..."</p> }
            >
                <div class="about-layout">
                    <div class="about-photo">
                        <EditableImage
                            src=field(|info| info.photo.clone())
                            on_save=save_photo.clone()
                            label="Photo de profil"
                            max_width=360.0
                            max_height=420.0
                        />
                    </div>

                    <div class="about-cards">
                        <div class="card identity-card">
                            <h3 class="card-heading">
                                <EditableText
                                    value=field(|info| info.name.clone())
                                    on_save=save_name.clone()
                                    placeholder="Votre Nom"
                                />
                            </h3>
                            <EditableText
                                value=field(|info| info.headline.clone())
                                on_save=save_headline.clone()
                                placeholder="Votre domaine d'études"
                            />
                        </div>

                        <div class="card">
                            <h3 class="card-heading">"Profil"</h3>
                            <EditableText
                                value=field(|info| info.profile.clone())
                                on_save=save_profile.clone()
                                placeholder="Présentez-vous..."
                                multiline=true
                            />
                        </div>

                        <div class="card">
                            <h3 class="card-heading">"Compétences"</h3>
                            <EditableList
                                items=skills
                                on_save=save_skills.clone()
                                placeholder="Nouvelle compétence"
                            />
                        </div>

                        <div class="card">
                            <h3 class="card-heading">"Contact"</h3>
                            <p>"📧 " <EditableText value=field(|info| info.email.clone()) on_save=save_email.clone() placeholder="votre.email@exemple.com" /></p>
                            <p>"📱 " <EditableText value=field(|info| info.phone.clone()) on_save=save_phone.clone() placeholder="+33 X XX XX XX XX" /></p>
                            <p>"🌐 LinkedIn: " <EditableText value=field(|info| info.linkedin.clone()) on_save=save_linkedin.clone() placeholder="/votre-profil" /></p>
                        </div>

                        <ContactFormCard />
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Visitor contact form posting to the backend contact endpoint
#[component]
fn ContactFormCard() -> impl IntoView {
    let store = use_app_store();

    let (form, set_form) = signal(ContactForm::default());
    let (sending, set_sending) = signal(false);

    let input = move |apply: fn(&mut ContactForm, String)| {
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            let value = input.value();
            set_form.update(|form| apply(form, value));
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let message = form.get_untracked();
        if message.email.trim().is_empty() || message.message.trim().is_empty() {
            return;
        }
        set_sending.set(true);
        spawn_local(async move {
            if api::submit_contact(&message).await {
                push_toast(&store, ToastKind::Success, "Message envoyé");
                set_form.try_set(ContactForm::default());
            } else {
                push_toast(&store, ToastKind::Error, "Échec de l'envoi du message");
            }
            set_sending.try_set(false);
        });
    };

    view! {
        <div class="card contact-form-card">
            <h3 class="card-heading">"Me contacter"</h3>
            <form class="contact-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Nom"
                    prop:value=move || form.get().name
                    on:input=input(|form, v| form.name = v)
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.get().email
                    on:input=input(|form, v| form.email = v)
                />
                <input
                    type="text"
                    placeholder="Sujet"
                    prop:value=move || form.get().subject
                    on:input=input(|form, v| form.subject = v)
                />
                <textarea
                    placeholder="Votre message..."
                    prop:value=move || form.get().message
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        let value = textarea.value();
                        set_form.update(|form| form.message = value);
                    }
                ></textarea>
                <button type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Envoi..." } else { "Envoyer" }}
                </button>
            </form>
        </div>
    }
}
