use crate::shared::components::page_header::SimpleContentPage;
use crate::shared::components::video_thumbnail::VideoThumbnail;
use contracts::domain::catalog::{self, VIDEO_SHELVES};
use leptos::prelude::*;

#[component]
pub fn VideoHubPage() -> impl IntoView {
    view! {
        <SimpleContentPage
            title="Video Hub"
            subtitle="Long-form visual analysis and breakdown from the tactical studio. Watch the game through the Perceivers' lens."
        >
            {VIDEO_SHELVES
                .iter()
                .enumerate()
                .map(|(i, (title, categories))| {
                    view! {
                        <section class="video-shelf" class:video-shelf--ruled={i > 0}>
                            <h2 class="section-title">{*title}</h2>
                            <div class="grid grid--3">
                                {catalog::videos_in(categories)
                                    .into_iter()
                                    .map(|video| view! { <VideoThumbnail video=video /> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </SimpleContentPage>
    }
}
