use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::enums::PageId;
use leptos::prelude::*;

/// Overlay for small screens. Every link navigates, and navigation closes the overlay.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="mobile-menu">
            <div class="mobile-menu__list">
                {PageId::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="nav-button"
                                class:nav-button--active=move || ctx.is_active(page)
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(page.icon())}
                                <span>{page.display_name()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
                <div class="mobile-menu__cta">
                    <Button
                        variant="primary"
                        icon="users"
                        on_click=Callback::new(move |_| ctx.navigate(PageId::Community))
                    >
                        "Join The Inner Circle"
                    </Button>
                </div>
            </div>
        </div>
    }
}
