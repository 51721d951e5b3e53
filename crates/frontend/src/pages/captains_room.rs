use crate::shared::components::page_header::SimpleContentPage;
use crate::shared::components::ui::{Button, Tag};
use contracts::domain::catalog::{self, Masterclass};
use leptos::prelude::*;

#[component]
pub fn CaptainsRoomPage() -> impl IntoView {
    view! {
        <SimpleContentPage
            title="Captain’s Room"
            subtitle="Pure focus on leadership logic, field geometry, bowling rotations, and in-game strategic shifts."
        >
            <h2 class="section-title section-title--ruled">"Latest Masterclass Analyses"</h2>
            <div class="masterclass-list">
                {catalog::masterclasses()
                    .iter()
                    .map(|article| view! { <MasterclassRow article=article /> })
                    .collect_view()}
            </div>
        </SimpleContentPage>
    }
}

#[component]
fn MasterclassRow(article: &'static Masterclass) -> impl IntoView {
    view! {
        <div class="masterclass">
            <div>
                <h3 class="masterclass__title">{article.title}</h3>
                <div class="tag-list">
                    {article.tags.iter().map(|tag| view! { <Tag>{*tag}</Tag> }).collect_view()}
                </div>
            </div>
            // Статья ещё не опубликована — кнопка без действия
            <Button variant="secondary" icon="clock">
                {format!("Read Masterclass ({} min)", article.read_time_min)}
            </Button>
        </div>
    }
}
