pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (+ mobile menu overlay)          |
/// +------------------------------------------+
/// |  Center: active page                     |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// |  BottomBar (mobile only, fixed)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />

            <main class="app-main">
                <center::Center />
            </main>

            <footer::Footer />
            <footer::BottomBar />
        </div>
    }
}
