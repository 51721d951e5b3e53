//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `styles/main.css` (`@keyframes card-appear`).
//! Для каскадного эффекта в сетках передавайте `delay_ms = index * 80`.

use leptos::prelude::*;
use thaw::Card;

/// Step between neighbouring cards in a staggered grid.
pub const STAGGER_MS: u32 = 80;

pub fn stagger_delay(index: usize) -> u32 {
    // Cap so long lists do not keep the last cards invisible for seconds.
    (index.min(8) as u32) * STAGGER_MS
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах.
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс карточки (`card--interactive`, `card--featured`, ...).
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div class=format!("card-frame {}", class)>
            <Card attr:style=style>
                {children()}
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 240);
        assert_eq!(stagger_delay(50), 640);
    }
}
