//! Login Modal Component
//!
//! Password prompt for entering admin mode. A wrong password shows an
//! inline error; the visitor-facing app is never blocked by auth failures.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::session::use_session;

#[component]
pub fn LoginModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let session = use_session();

    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);
    let (pending, set_pending) = signal(false);

    let close = move |_| {
        set_error.set(None);
        set_open.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let value = password.get_untracked();
        if value.is_empty() {
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            if session.login(value).await {
                set_password.try_set(String::new());
                set_error.try_set(None);
                set_open.try_set(false);
            } else {
                set_error.try_set(Some("Mot de passe incorrect"));
            }
            set_pending.try_set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">"Accès administrateur"</span>
                        <button class="close-btn" on:click=close>"×"</button>
                    </div>
                    <form class="login-form" on:submit=submit>
                        <input
                            type="password"
                            class="password-input"
                            placeholder="Mot de passe"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_password.set(input.value());
                            }
                        />
                        {move || error.get().map(|message| view! { <p class="login-error">{message}</p> })}
                        <button type="submit" class="login-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
