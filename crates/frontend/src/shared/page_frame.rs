//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`         — `"{page code}--page"`, e.g. `"match-insights--page"`
//!   - `data-page`  — the page code
//!
//! Страницы сами фрейм не ставят: его добавляет `render_page`, так что корень
//! всегда соответствует запрошенному `PageId`.

use crate::layout::center::page_dom_id;
use contracts::enums::PageId;
use leptos::prelude::*;

/// Attributes of a page root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAttrs {
    pub id: &'static str,
    pub class: &'static str,
    pub data_page: &'static str,
}

impl FrameAttrs {
    /// Home gets the wide hero layout (`page page--home`), the rest use `page`.
    pub fn for_page(page: PageId) -> Self {
        let class = match page {
            PageId::Home => "page page--home",
            _ => "page",
        };
        Self {
            id: page_dom_id(page),
            class,
            data_page: page.code(),
        }
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(page: PageId, children: Children) -> impl IntoView {
    let attrs = FrameAttrs::for_page(page);

    view! {
        <div id=attrs.id class=attrs.class data-page=attrs.data_page>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(FrameAttrs::for_page(PageId::Home).class, "page page--home");
        assert_eq!(FrameAttrs::for_page(PageId::Contact).class, "page");
    }
}
