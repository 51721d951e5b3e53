//! Page registry - единственный источник правды для маппинга PageId → View

use crate::pages::about::AboutPage;
use crate::pages::captains_room::CaptainsRoomPage;
use crate::pages::community::CommunityPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::match_insights::MatchInsightsPage;
use crate::pages::momentum_lab::MomentumLabPage;
use crate::pages::player_mind_lab::PlayerMindLabPage;
use crate::pages::tactical_library::TacticalLibraryPage;
use crate::pages::video_hub::VideoHubPage;
use crate::shared::page_frame::PageFrame;
use contracts::enums::PageId;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит страницу по её идентификатору внутри [`PageFrame`].
///
/// Корень (`id`, `data-page`) берётся из того же `page`, что выбирает тело страницы.
pub fn render_page(page: PageId) -> AnyView {
    log!("render page: {}", page.code());

    view! {
        <PageFrame page=page>
            {page_body(page)}
        </PageFrame>
    }
    .into_any()
}

/// `match` исчерпывающий: новая страница в `PageId` не скомпилируется без ветки здесь.
fn page_body(page: PageId) -> AnyView {
    match page {
        PageId::Home => view! { <HomePage /> }.into_any(),
        PageId::MatchInsights => view! { <MatchInsightsPage /> }.into_any(),
        PageId::PlayerMindLab => view! { <PlayerMindLabPage /> }.into_any(),
        PageId::CaptainsRoom => view! { <CaptainsRoomPage /> }.into_any(),
        PageId::MomentumLab => view! { <MomentumLabPage /> }.into_any(),
        PageId::TacticalLibrary => view! { <TacticalLibraryPage /> }.into_any(),
        PageId::VideoHub => view! { <VideoHubPage /> }.into_any(),
        PageId::Community => view! { <CommunityPage /> }.into_any(),
        PageId::About => view! { <AboutPage /> }.into_any(),
        PageId::Contact => view! { <ContactPage /> }.into_any(),
    }
}

/// Root element id of a page, `"{code}--page"`.
pub fn page_dom_id(page: PageId) -> &'static str {
    match page {
        PageId::Home => "home--page",
        PageId::MatchInsights => "match-insights--page",
        PageId::PlayerMindLab => "player-mind-lab--page",
        PageId::CaptainsRoom => "captains-room--page",
        PageId::MomentumLab => "momentum-lab--page",
        PageId::TacticalLibrary => "tactical-library--page",
        PageId::VideoHub => "video-hub--page",
        PageId::Community => "community--page",
        PageId::About => "about--page",
        PageId::Contact => "contact--page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_frame::FrameAttrs;
    use contracts::shared::NavigationState;
    use std::collections::HashSet;

    #[test]
    fn test_navigated_page_gets_its_own_root() {
        let mut state = NavigationState::new();
        for page in PageId::all() {
            state.navigate(page);
            let attrs = FrameAttrs::for_page(state.current);
            assert_eq!(attrs.id, format!("{}--page", page.code()));
            assert_eq!(attrs.data_page, page.code());
        }

        state.navigate_code("no-such-page");
        assert_eq!(FrameAttrs::for_page(state.current).id, "home--page");
    }

    #[test]
    fn test_page_dom_ids_follow_codes() {
        for page in PageId::all() {
            assert_eq!(page_dom_id(page), format!("{}--page", page.code()));
        }
    }

    #[test]
    fn test_page_dom_ids_are_unique() {
        let ids: HashSet<&str> = PageId::all().into_iter().map(page_dom_id).collect();
        assert_eq!(ids.len(), PageId::all().len());
    }
}
