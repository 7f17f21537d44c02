//! Home Page
//!
//! Static hero with navigation cards; no backend record of its own.

use leptos::prelude::*;

use crate::app::Page;

const CARDS: &[(Page, &str, &str)] = &[
    (Page::StageOne, "Stage 1ère Année", "Découvrez mon premier stage professionnel"),
    (Page::StageTwo, "Stage 2ème Année", "Mon évolution professionnelle"),
    (Page::Conclusion, "Conclusion", "Bilan et perspectives d'avenir"),
];

#[component]
pub fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <div class="page home-page">
            <div class="hero">
                <h1 class="hero-title">"Mon Portfolio"</h1>
                <p class="hero-subtitle">
                    "Découvrez mon parcours professionnel à travers mes stages de fin d'années"
                </p>

                <div class="nav-cards">
                    {CARDS
                        .iter()
                        .map(|(target, title, subtitle)| {
                            let target = *target;
                            view! {
                                <button class="nav-card" on:click=move |_| set_page.set(target)>
                                    <h3 class="card-title">{*title}</h3>
                                    <p class="card-subtitle">{*subtitle}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button class="about-link" on:click=move |_| set_page.set(Page::About)>
                    "À propos de moi"
                </button>
            </div>
        </div>
    }
}
