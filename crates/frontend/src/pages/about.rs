use crate::shared::components::page_header::SimpleContentPage;
use crate::shared::icons::icon;
use contracts::domain::catalog::{self, Pillar, ORIGIN_STORY};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SimpleContentPage
            title="Our Philosophy"
            subtitle="We exist to elevate the conversation around cricket. This is how we approach the game."
        >
            <h2 class="section-title accent">"The Origin Story"</h2>
            <p class="about__story">{ORIGIN_STORY}</p>

            <h2 class="section-title section-title--ruled-top accent">"Our Pillars of Analysis"</h2>
            <div class="pillar-list">
                {catalog::philosophy_pillars()
                    .iter()
                    .map(|pillar| view! { <PhilosophyPillar pillar=pillar /> })
                    .collect_view()}
            </div>
        </SimpleContentPage>
    }
}

#[component]
fn PhilosophyPillar(pillar: &'static Pillar) -> impl IntoView {
    view! {
        <div class="pillar">
            <span class="pillar__icon accent">{icon(pillar.icon)}</span>
            <div>
                <h3 class="pillar__title">{pillar.title}</h3>
                <p class="muted">{pillar.body}</p>
            </div>
        </div>
    }
}
