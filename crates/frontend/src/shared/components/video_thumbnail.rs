use crate::shared::icons::icon;
use contracts::domain::catalog::Video;
use leptos::prelude::*;

#[component]
pub fn VideoThumbnail(video: &'static Video) -> impl IntoView {
    view! {
        <div class="video-thumb" data-category=video.category.display_name()>
            <div class="video-thumb__poster">
                {icon("video")}
                <span class="video-thumb__duration">{video.duration}</span>
            </div>
            <div class="video-thumb__body">
                <h4 class="video-thumb__title">{video.title}</h4>
                <p class="video-thumb__hint">"Tap to watch the full breakdown."</p>
            </div>
        </div>
    }
}
