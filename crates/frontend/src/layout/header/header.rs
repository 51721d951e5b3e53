use super::mobile_menu::MobileMenu;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::enums::PageId;
use contracts::shared::brand::BRAND_NAME;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button class="header__brand" on:click=move |_| ctx.navigate(PageId::Home)>
                    {BRAND_NAME}
                </button>

                <nav class="header__nav">
                    {PageId::header_pages()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="header__link"
                                    class:header__link--active=move || ctx.is_active(page)
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {page.display_name()}
                                    <span class="header__underline"></span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header__actions">
                    // Поиск декоративный
                    <button class="button button--ghost header__search" aria-label="Search">
                        {icon("search")}
                    </button>
                    <div class="header__cta">
                        <Button
                            variant="primary"
                            icon="users"
                            on_click=Callback::new(move |_| ctx.navigate(PageId::Community))
                        >
                            "Join The Inner Circle"
                        </Button>
                    </div>
                    <button
                        class="button button--ghost header__menu-toggle"
                        class:header__menu-toggle--open=move || ctx.menu_open()
                        aria-label="Toggle Menu"
                        on:click=move |_| ctx.toggle_menu()
                    >
                        {icon("menu")}
                    </button>
                </div>
            </div>

            <Show when=move || ctx.menu_open()>
                <MobileMenu />
            </Show>
        </header>
    }
}
