//! Константы бренда. Настраиваются только при сборке.

pub const BRAND_NAME: &str = "The Cricket Perceivers";
pub const TAGLINE: &str = "Seeing what others only watch.";

pub const BRAND_BLURB: &str = "We explain the WHY behind everything in a cricket match — decisions, collapses, comebacks, and momentum. Designed for those who feel the game.";

pub const APP_VISION: &str =
    "Your personal cricket tactics companion. Coming soon to iOS/Android.";

pub const CONTACT_EMAIL: &str = "collaborate@cricketperceivers.com";

/// (label, url)
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Twitter (X)", "https://twitter.com/placeholder"),
    ("YouTube", "https://youtube.com/placeholder"),
    ("Instagram", "https://instagram.com/placeholder"),
];

/// Цвета темы (hex)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub accent: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
}

pub const COLORS: ColorTokens = ColorTokens {
    accent: "#fbbf24",
    background: "#020617",
    card: "#0f172a",
    text: "#e5e7eb",
    muted: "#9ca3af",
};

impl ColorTokens {
    /// (CSS custom property, value)
    pub fn css_variables(&self) -> [(&'static str, &'static str); 5] {
        [
            ("--color-accent", self.accent),
            ("--color-bg", self.background),
            ("--color-card", self.card),
            ("--color-text", self.text),
            ("--color-muted", self.muted),
        ]
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 The Cricket Perceivers.");
    }

    #[test]
    fn test_css_variables_are_hex() {
        for (name, value) in COLORS.css_variables() {
            assert!(name.starts_with("--color-"));
            assert!(value.starts_with('#') && value.len() == 7, "{name}={value}");
        }
    }
}
