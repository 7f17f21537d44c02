//! Portfolio Frontend App
//!
//! Composition root: provides the session context and the global store,
//! verifies the stored admin session once, and switches pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LoginModal, NavBar, ToastHost};
use crate::pages::{AboutPage, ConclusionPage, HomePage, StagePage};
use crate::session::SessionContext;
use crate::store::AppState;

/// In-app navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    StageOne,
    StageTwo,
    Conclusion,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let session = SessionContext::new();
    provide_context(session);

    let (page, set_page) = signal(Page::Home);
    let (show_login, set_show_login) = signal(false);

    // Verify the stored admin session against the backend, once per load
    Effect::new(move |_| {
        session.check_status();
    });

    view! {
        <div class="app-shell">
            <NavBar page=page set_page=set_page set_show_login=set_show_login />

            {move || match page.get() {
                Page::Home => view! { <HomePage set_page=set_page /> }.into_any(),
                Page::About => view! { <AboutPage /> }.into_any(),
                Page::StageOne => {
                    view! { <StagePage stage_type="stage1" title="Stage 1ère Année" /> }.into_any()
                }
                Page::StageTwo => {
                    view! { <StagePage stage_type="stage2" title="Stage 2ème Année" /> }.into_any()
                }
                Page::Conclusion => view! { <ConclusionPage /> }.into_any(),
            }}

            <LoginModal open=show_login set_open=set_show_login />
            <ToastHost />
        </div>
    }
}
