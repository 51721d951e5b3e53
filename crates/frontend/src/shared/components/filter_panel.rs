use super::ui::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - titled panel with active-filter badge
#[component]
pub fn FilterPanel(
    #[prop(optional)]
    title: Option<&'static str>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                {icon("filter")}
                <span class="filter-panel__title">{title.unwrap_or("Filter Analysis")}</span>
                <Badge count=active_filters_count />
            </div>
            <div class="filter-panel-content">
                {children()}
            </div>
        </div>
    }
}

/// ThemeToggle - pill button that is either on or off
#[component]
pub fn ThemeToggle(
    /// Tag label
    label: &'static str,

    #[prop(into)]
    selected: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--selected=move || selected.get()
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_toggle.run(())
        >
            {label}
        </button>
    }
}
