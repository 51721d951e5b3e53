//! Brand theme: the single dark palette from `contracts::shared::brand`.
//!
//! Цвета выставляются CSS-переменными на `<html>` до монтирования приложения,
//! стили в `styles/main.css` ссылаются только на переменные.

use contracts::shared::brand::{ColorTokens, COLORS};
use web_sys::window;

/// Inline `style` value for the document root.
pub fn css_declarations(tokens: &ColorTokens) -> String {
    tokens
        .css_variables()
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Set the brand colour variables on the document root.
pub fn apply_brand_tokens() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if root.set_attribute("style", &css_declarations(&COLORS)).is_err() {
        log::warn!("failed to apply brand colour tokens");
    }
    let _ = root.set_attribute("data-theme", "perceivers-dark");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_declarations() {
        let tokens = ColorTokens {
            accent: "#111111",
            background: "#222222",
            card: "#333333",
            text: "#444444",
            muted: "#555555",
        };
        assert_eq!(
            css_declarations(&tokens),
            "--color-accent: #111111; --color-bg: #222222; --color-card: #333333; \
             --color-text: #444444; --color-muted: #555555;"
        );
    }
}
