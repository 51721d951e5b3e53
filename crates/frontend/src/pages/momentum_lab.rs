use crate::shared::components::page_header::SimpleContentPage;
use contracts::domain::catalog::{self, MomentumEvent};
use leptos::prelude::*;

#[component]
pub fn MomentumLabPage() -> impl IntoView {
    view! {
        <SimpleContentPage
            title="Momentum Lab"
            subtitle="Visualizing and quantifying the abstract energy shifts in a cricket match. This is where you feel the game."
        >
            <h2 class="section-title">"The Anatomy of a Momentum Shift (Example Match)"</h2>
            <div class="timeline">
                {catalog::momentum_events()
                    .iter()
                    .map(|event| view! { <TimelineEvent event=event /> })
                    .collect_view()}
            </div>
            <p class="muted small">
                <span class="accent">"UP/DOWN Markers:"</span>
                " Up (Green) indicates a significant energy injection for the batting side. Down (Red) indicates a major psychological swing towards the fielding team."
            </p>
        </SimpleContentPage>
    }
}

#[component]
fn TimelineEvent(event: &'static MomentumEvent) -> impl IntoView {
    view! {
        <div class="timeline__event">
            <div class=format!("timeline__marker timeline__marker--{}", event.momentum.css_modifier())></div>
            <p class="timeline__over">{event.over}</p>
            <h3 class="timeline__headline">{event.headline()}</h3>
            <p class="muted">{event.body()}</p>
        </div>
    }
}
