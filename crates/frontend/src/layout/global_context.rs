//! Состояние приложения: текущая страница, мобильное меню, фильтр инсайтов,
//! подтверждение отправки формы.
//!
//! Компоненты читают сигналы, а меняют состояние только через методы ниже.

use contracts::domain::{InsightFilter, Selection, TeamCode};
use contracts::enums::{MatchFormat, PageId};
use contracts::shared::forms::{self, Acknowledgement, FormKind};
use contracts::shared::{NavigationOutcome, NavigationState};
use leptos::prelude::*;

/// How long a form acknowledgement stays on screen.
const ACK_VISIBLE_MS: u32 = 4000;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavigationState>,
    pub insight_filter: RwSignal<InsightFilter>,
    pub ack: RwSignal<Option<Acknowledgement>>,
    ack_seq: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavigationState::new()),
            insight_filter: RwSignal::new(InsightFilter::default()),
            ack: RwSignal::new(None),
            ack_seq: RwSignal::new(0),
        }
    }

    pub fn current_page(&self) -> PageId {
        self.nav.with(|n| n.current)
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.nav.with(|n| n.is_active(page))
    }

    pub fn menu_open(&self) -> bool {
        self.nav.with(|n| n.menu_open)
    }

    pub fn navigate(&self, page: PageId) {
        log::info!("navigate: {}", page.code());
        self.apply_navigation(|n| n.navigate(page));
        crate::shared::browser::scroll_to_top();
    }

    /// String-keyed navigation; unknown codes land on Home with a console warning.
    pub fn navigate_code(&self, code: &str) {
        let mut outcome = None;
        self.apply_navigation(|n| outcome = Some(n.navigate_code(code)));
        if let Some(NavigationOutcome::FellBack { requested }) = outcome {
            log::warn!("unknown page code {requested:?}, falling back to home");
        }
        crate::shared::browser::scroll_to_top();
    }

    /// Every entry into Match Insights starts from an unconstrained filter.
    fn apply_navigation(&self, step: impl FnOnce(&mut NavigationState)) {
        let before = self.nav.get_untracked();
        self.nav.update(step);
        let entered = self.nav.with_untracked(|n| n.entered_from(&before));
        if entered == Some(PageId::MatchInsights) {
            self.insight_filter.set(InsightFilter::default());
        }
    }

    pub fn toggle_menu(&self) {
        self.nav.update(|n| n.toggle_menu());
    }

    pub fn set_format_choice(&self, raw: String) {
        let format = Selection::from_choice(&raw, MatchFormat::from_code);
        log::debug!("insight filter: format={raw}");
        self.insight_filter.update(|f| *f = f.with_format(format));
    }

    pub fn set_team_choice(&self, raw: String) {
        let team = Selection::from_choice(&raw, |code| Some(TeamCode::new(code)));
        log::debug!("insight filter: team={raw}");
        self.insight_filter.update(|f| *f = f.with_team(team));
    }

    pub fn toggle_theme(&self, tag: &str) {
        log::debug!("insight filter: toggle theme {tag:?}");
        self.insight_filter.update(|f| *f = f.toggle_theme(tag));
    }

    /// Stubbed submission: shows a local acknowledgement, sends nothing.
    pub fn submit_form(&self, form: FormKind) {
        let ack = forms::submit(form);
        log::info!("form stub {:?}: {}", ack.form, ack.message);
        self.ack.set(Some(ack));

        self.ack_seq.update(|s| *s = s.wrapping_add(1));
        let seq = self.ack_seq.get_untracked();
        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ACK_VISIBLE_MS).await;
            // A newer submission owns the message now.
            if this.ack_seq.get_untracked() == seq {
                this.ack.set(None);
            }
        });
    }

    pub fn ack_for(&self, form: FormKind) -> Option<&'static str> {
        self.ack
            .with(|ack| ack.filter(|a| a.form == form).map(|a| a.message))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_entering_insights_resets_filter() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.apply_navigation(|n| n.navigate(PageId::MatchInsights));
            ctx.set_format_choice("ODI".to_string());
            ctx.toggle_theme("Collapse");
            assert_eq!(ctx.insight_filter.with_untracked(|f| f.active_count()), 2);

            // Клик по уже открытой странице выбор не сбрасывает
            ctx.apply_navigation(|n| n.navigate(PageId::MatchInsights));
            assert_eq!(ctx.insight_filter.with_untracked(|f| f.active_count()), 2);

            ctx.apply_navigation(|n| n.navigate(PageId::Home));
            ctx.apply_navigation(|n| n.navigate(PageId::MatchInsights));
            assert_eq!(ctx.insight_filter.get_untracked(), InsightFilter::default());
        });
    }

    #[test]
    fn test_deep_link_into_insights_starts_unfiltered() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.toggle_theme("Pitch");
            ctx.apply_navigation(|n| {
                n.navigate_code("match-insights");
            });
            assert_eq!(ctx.nav.with_untracked(|n| n.current), PageId::MatchInsights);
            assert_eq!(ctx.insight_filter.get_untracked(), InsightFilter::default());
        });
    }

    #[test]
    fn test_navigation_elsewhere_keeps_filter_and_closes_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.toggle_theme("Pitch");
            ctx.toggle_menu();
            ctx.apply_navigation(|n| n.navigate(PageId::VideoHub));

            let nav = ctx.nav.get_untracked();
            assert_eq!(nav.current, PageId::VideoHub);
            assert!(!nav.menu_open);
            assert!(ctx.insight_filter.with_untracked(|f| f.is_theme_selected("Pitch")));
        });
    }
}
