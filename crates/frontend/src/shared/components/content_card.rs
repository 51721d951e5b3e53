use super::card_animated::CardAnimated;
use super::ui::{Button, Tag, TagList};
use contracts::enums::ContentKind;
use leptos::prelude::*;

/// Tag that gets the accent style inside content cards.
pub const ACCENT_TAG: &str = "Momentum Shift";

/// Standard content card: tags + kind, title, teaser, "Read Insight".
#[component]
pub fn ContentCard(
    title: &'static str,
    teaser: &'static str,
    tags: &'static [&'static str],
    kind: ContentKind,
    #[prop(optional)]
    delay_ms: u32,
    on_open: Callback<()>,
) -> impl IntoView {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();

    view! {
        <div class="content-card" on:click=move |_| on_open.run(())>
            <CardAnimated delay_ms=delay_ms class="card--interactive">
                <div class="content-card__meta">
                    <TagList tags=tags accent_tag=ACCENT_TAG />
                    <Tag>{kind.display_name()}</Tag>
                </div>
                <h3 class="content-card__title">{title}</h3>
                <p class="content-card__teaser">{teaser}</p>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_open.run(());
                    })
                >
                    "Read Insight"
                </Button>
            </CardAnimated>
        </div>
    }
}
