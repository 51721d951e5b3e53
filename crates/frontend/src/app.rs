use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Deep link: открыть страницу из `#code`, неизвестный код даёт Home
    if let Some(code) = crate::shared::browser::location_page_code() {
        ctx.navigate_code(&code);
    }

    view! {
        <Shell />
    }
}
