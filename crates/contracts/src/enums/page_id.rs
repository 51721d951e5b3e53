use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Страницы сайта. Набор закрыт и не расширяется во время работы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Home,
    MatchInsights,
    PlayerMindLab,
    CaptainsRoom,
    MomentumLab,
    TacticalLibrary,
    VideoHub,
    Community,
    About,
    Contact,
}

impl PageId {
    /// Получить код страницы
    pub fn code(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::MatchInsights => "match-insights",
            PageId::PlayerMindLab => "player-mind-lab",
            PageId::CaptainsRoom => "captains-room",
            PageId::MomentumLab => "momentum-lab",
            PageId::TacticalLibrary => "tactical-library",
            PageId::VideoHub => "video-hub",
            PageId::Community => "community",
            PageId::About => "about",
            PageId::Contact => "contact",
        }
    }

    /// Подпись в навигации
    pub fn display_name(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::MatchInsights => "Match Insights",
            PageId::PlayerMindLab => "Player Mind Lab",
            PageId::CaptainsRoom => "Captain's Room",
            PageId::MomentumLab => "Momentum Lab",
            PageId::TacticalLibrary => "Tactical Library",
            PageId::VideoHub => "Video Hub",
            PageId::Community => "Perceivers’ Corner",
            PageId::About => "Our Philosophy",
            PageId::Contact => "Collaborate",
        }
    }

    /// Ключ иконки для `frontend::shared::icons::icon`
    pub fn icon(&self) -> &'static str {
        match self {
            PageId::Home => "layout-grid",
            PageId::MatchInsights => "trophy",
            PageId::PlayerMindLab => "brain",
            PageId::CaptainsRoom => "briefcase",
            PageId::MomentumLab => "zap",
            PageId::TacticalLibrary => "target",
            PageId::VideoHub => "video",
            PageId::Community => "users",
            PageId::About => "info",
            PageId::Contact => "mail",
        }
    }

    /// All pages in menu order.
    pub fn all() -> [PageId; 10] {
        [
            PageId::Home,
            PageId::MatchInsights,
            PageId::PlayerMindLab,
            PageId::CaptainsRoom,
            PageId::MomentumLab,
            PageId::TacticalLibrary,
            PageId::VideoHub,
            PageId::Community,
            PageId::About,
            PageId::Contact,
        ]
    }

    /// Парсинг из строки (точное совпадение, с учётом регистра)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|page| page.code() == code)
    }

    /// Desktop header links: everything except Home (the brand button covers it).
    pub fn header_pages() -> Vec<PageId> {
        Self::all()
            .into_iter()
            .filter(|p| *p != PageId::Home)
            .collect()
    }

    /// Footer "Sections" column. Contact has its own link under "Connect".
    pub fn footer_sections() -> Vec<PageId> {
        Self::all()
            .into_iter()
            .filter(|p| !matches!(p, PageId::Home | PageId::Contact))
            .collect()
    }

    /// Mobile bottom bar; the bar adds a separate shortcut to the video hub.
    pub fn bottom_bar_pages() -> Vec<PageId> {
        Self::all().into_iter().take(4).collect()
    }
}

impl FromStr for PageId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| anyhow::anyhow!("unknown page code: {s:?}"))
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for page in PageId::all() {
            assert_eq!(PageId::from_code(page.code()), Some(page));
            assert_eq!(page.code().parse::<PageId>().unwrap(), page);
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(PageId::from_code("Home"), None);
        assert_eq!(PageId::from_code("MATCH-INSIGHTS"), None);
        assert!("video_hub".parse::<PageId>().is_err());
    }

    #[test]
    fn test_serde_uses_page_codes() {
        for page in PageId::all() {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.code()));
            let back: PageId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, page);
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }

    #[test]
    fn test_link_groups() {
        let header = PageId::header_pages();
        assert_eq!(header.len(), 9);
        assert!(!header.contains(&PageId::Home));

        let footer = PageId::footer_sections();
        assert_eq!(footer.len(), 8);
        assert!(!footer.contains(&PageId::Contact));

        assert_eq!(
            PageId::bottom_bar_pages(),
            vec![
                PageId::Home,
                PageId::MatchInsights,
                PageId::PlayerMindLab,
                PageId::CaptainsRoom
            ]
        );
    }
}
