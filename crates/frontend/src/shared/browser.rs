//! Тонкие обёртки над `window`. Ошибки браузера игнорируются: на странице нет
//! операций, которые могли бы их осмысленно обработать.

use web_sys::window;

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Page code from the URL fragment (`#match-insights`), if any.
pub fn location_page_code() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let code = hash.trim_start_matches('#');
    (!code.is_empty()).then(|| code.to_string())
}

/// Card click placeholder: detail pages are not part of the site yet.
pub fn notify(message: &str) {
    log::info!("{message}");
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
