use leptos::prelude::*;

/// PageHeader component - accent title plus muted subtitle, used by every inner page
#[component]
pub fn PageHeader(
    /// Page title (required)
    title: &'static str,

    /// Optional subtitle
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </div>
    }
}

/// Header + boxed content, the layout of most inner pages.
#[component]
pub fn SimpleContentPage(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <PageHeader title=title subtitle=subtitle />
        <div class="page__panel">
            {children()}
        </div>
    }
}
