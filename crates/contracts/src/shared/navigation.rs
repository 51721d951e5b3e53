//! Состояние навигации: активная страница и флаг мобильного меню.

use crate::enums::PageId;

/// Результат перехода по строковому коду страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Resolved(PageId),
    /// Код не распознан, показана страница по умолчанию
    FellBack { requested: String },
}

impl NavigationOutcome {
    pub fn page(&self) -> PageId {
        match self {
            NavigationOutcome::Resolved(page) => *page,
            NavigationOutcome::FellBack { .. } => PageId::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current: PageId,
    pub menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the page. Every navigation closes the mobile menu.
    pub fn navigate(&mut self, page: PageId) {
        self.current = page;
        self.menu_open = false;
    }

    /// Unknown codes land on the default page instead of failing.
    pub fn navigate_code(&mut self, code: &str) -> NavigationOutcome {
        let outcome = match PageId::from_code(code) {
            Some(page) => NavigationOutcome::Resolved(page),
            None => NavigationOutcome::FellBack {
                requested: code.to_string(),
            },
        };
        self.navigate(outcome.page());
        outcome
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.current == page
    }

    /// Page that was opened by moving from `before` to `self`; `None` when the page did not change.
    pub fn entered_from(&self, before: &NavigationState) -> Option<PageId> {
        (self.current != before.current).then_some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home_with_menu_closed() {
        let state = NavigationState::new();
        assert_eq!(state.current, PageId::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigate_selects_every_page() {
        let mut state = NavigationState::new();
        for page in PageId::all() {
            state.navigate(page);
            assert_eq!(state.current, page);
            assert!(state.is_active(page));
        }
    }

    #[test]
    fn test_navigate_code_known() {
        let mut state = NavigationState::new();
        for page in PageId::all() {
            assert_eq!(
                state.navigate_code(page.code()),
                NavigationOutcome::Resolved(page)
            );
            assert_eq!(state.current, page);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_home() {
        let mut state = NavigationState::new();
        state.navigate(PageId::VideoHub);

        let outcome = state.navigate_code("match-insight");
        assert_eq!(
            outcome,
            NavigationOutcome::FellBack {
                requested: "match-insight".to_string()
            }
        );
        assert_eq!(outcome.page(), PageId::Home);
        assert_eq!(state.current, PageId::Home);

        state.navigate_code("");
        assert_eq!(state.current, PageId::Home);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut state = NavigationState::new();
        for page in PageId::all() {
            state.toggle_menu();
            assert!(state.menu_open);
            state.navigate(page);
            assert!(!state.menu_open);
        }

        state.toggle_menu();
        state.navigate_code("no-such-page");
        assert!(!state.menu_open);
    }

    #[test]
    fn test_entered_from() {
        let mut state = NavigationState::new();
        let before = state;
        state.navigate(PageId::MatchInsights);
        assert_eq!(state.entered_from(&before), Some(PageId::MatchInsights));

        // Повторный клик по активной ссылке страницу не открывает заново
        let before = state;
        state.toggle_menu();
        state.navigate(PageId::MatchInsights);
        assert_eq!(state.entered_from(&before), None);

        let before = state;
        state.navigate_code("nope");
        assert_eq!(state.entered_from(&before), Some(PageId::Home));
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = NavigationState::new();
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.menu_open);
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open);
        assert_eq!(state.current, PageId::Home);
    }
}
