use super::registry::render_page;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    // Memo: opening/closing the menu must not remount the page.
    let current = Memo::new(move |_| ctx.current_page());

    view! {
        <div data-zone="center" class="app-center">
            {move || render_page(current.get())}
        </div>
    }
}
