use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::enums::PageId;
use leptos::prelude::*;

/// Fixed bottom navigation for small screens: first pages of the menu plus a Videos shortcut.
#[component]
pub fn BottomBar() -> impl IntoView {
    let ctx = use_app_context();

    let item = move |page: PageId, label: &'static str| {
        view! {
            <button
                class="bottom-bar__item"
                class:bottom-bar__item--active=move || ctx.is_active(page)
                on:click=move |_| ctx.navigate(page)
            >
                {icon(page.icon())}
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <nav data-zone="bottom-bar" class="bottom-bar">
            {PageId::bottom_bar_pages()
                .into_iter()
                .map(|page| item(page, page.display_name()))
                .collect_view()}
            {item(PageId::VideoHub, "Videos")}
        </nav>
    }
}
