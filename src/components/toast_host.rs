//! Toast Host Component
//!
//! Renders the transient notification stack from the global store.

use leptos::prelude::*;

use crate::store::{dismiss_toast, use_app_store};
use crate::store::AppStateStoreFields;

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let toast_id = toast.id;
                    let class = format!("toast {}", toast.kind.css_class());
                    view! {
                        <div class=class>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-dismiss" on:click=move |_| dismiss_toast(&store, toast_id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
