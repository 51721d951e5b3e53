use crate::shared::browser::notify;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::SimpleContentPage;
use crate::shared::components::ui::Tag;
use crate::shared::icons::icon;
use contracts::domain::catalog::{self, TacticalConcept};
use leptos::prelude::*;

#[component]
pub fn TacticalLibraryPage() -> impl IntoView {
    view! {
        <SimpleContentPage
            title="Tactical Library"
            subtitle="An evergreen, searchable glossary of advanced cricket concepts, strategies, and psychological mechanisms."
        >
            <div class="grid grid--3">
                {catalog::tactical_concepts()
                    .iter()
                    .enumerate()
                    .map(|(i, concept)| view! { <ConceptCard concept=concept delay_ms=stagger_delay(i) /> })
                    .collect_view()}
            </div>
        </SimpleContentPage>
    }
}

#[component]
fn ConceptCard(concept: &'static TacticalConcept, delay_ms: u32) -> impl IntoView {
    view! {
        <div
            class="concept-card"
            on:click=move |_| notify(&format!("Navigating to definition of: {}", concept.title))
        >
            <CardAnimated delay_ms=delay_ms class="card--interactive">
                <span class="accent">{icon("target")}</span>
                <h3 class="concept-card__title">{concept.title}</h3>
                <p class="muted small">{concept.definition}</p>
                <div class="tag-list">
                    {concept.tags.iter().map(|tag| view! { <Tag>{*tag}</Tag> }).collect_view()}
                </div>
            </CardAnimated>
        </div>
    }
}
