//! Navigation Bar Component
//!
//! Page links plus the admin affordances: login button when anonymous,
//! edit-mode toggle and logout once authenticated. Hidden on the home
//! page, which carries its own navigation cards.

use leptos::prelude::*;

use crate::app::Page;
use crate::models::ToastKind;
use crate::session::use_session;
use crate::store::{push_toast, use_app_store};

const LINKS: &[(Page, &str)] = &[
    (Page::About, "À propos"),
    (Page::StageOne, "Stage 1ère"),
    (Page::StageTwo, "Stage 2ème"),
    (Page::Conclusion, "Conclusion"),
];

#[component]
pub fn NavBar(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    set_show_login: WriteSignal<bool>,
) -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let logout = move |_| {
        session.logout();
        push_toast(&store, ToastKind::Info, "Déconnecté");
    };

    view! {
        <Show when=move || page.get() != Page::Home>
            <nav class="nav-bar">
                <button class="nav-brand" on:click=move |_| set_page.set(Page::Home)>
                    "Portfolio"
                </button>

                <div class="nav-links">
                    {LINKS
                        .iter()
                        .map(|(target, label)| {
                            let target = *target;
                            view! {
                                <button
                                    class=move || {
                                        if page.get() == target { "nav-link active" } else { "nav-link" }
                                    }
                                    on:click=move |_| set_page.set(target)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav-admin">
                    <Show
                        when=move || session.authenticated.get()
                        fallback=move || {
                            view! {
                                <button class="admin-btn" on:click=move |_| set_show_login.set(true)>
                                    "Admin"
                                </button>
                            }
                        }
                    >
                        <button
                            class=move || {
                                if session.edit_mode.get() { "edit-toggle active" } else { "edit-toggle" }
                            }
                            on:click=move |_| session.toggle_edit_mode()
                        >
                            {move || if session.edit_mode.get() { "Mode édition : ON" } else { "Mode édition" }}
                        </button>
                        <button class="logout-btn" on:click=logout>"Déconnexion"</button>
                    </Show>
                </div>
            </nav>
        </Show>
    }
}
