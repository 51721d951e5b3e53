use leptos::prelude::*;

/// Tag chip. Accent tags get the amber outline.
#[component]
pub fn Tag(
    #[prop(optional)]
    accent: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <span class="tag" class:tag--accent=accent>
            {children()}
        </span>
    }
}

/// Ряд тегов; `accent_tag` подсвечивается
#[component]
pub fn TagList(
    tags: Vec<String>,
    #[prop(optional)]
    accent_tag: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags
                .into_iter()
                .map(|tag| {
                    let accent = accent_tag == Some(tag.as_str());
                    view! { <Tag accent=accent>{tag}</Tag> }
                })
                .collect_view()}
        </div>
    }
}

/// Counter badge, e.g. number of active filters
#[component]
pub fn Badge(
    #[prop(into)]
    count: Signal<usize>,
) -> impl IntoView {
    move || {
        let count = count.get();
        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
    }
}
