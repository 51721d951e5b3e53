use leptos::prelude::*;

/// Shown instead of an empty list.
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <p class="empty-state" role="status">{message}</p>
    }
}
