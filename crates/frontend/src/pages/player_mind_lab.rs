use crate::shared::browser::notify;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::catalog::{self, PlayerProfile, PLAYER_ROLE_OPTIONS};
use leptos::prelude::*;

fn open_profile(player: &PlayerProfile) {
    notify(&format!("Navigating to full profile for {}", player.name));
}

#[component]
pub fn PlayerMindLabPage() -> impl IntoView {
    // Роль пока никак не фильтрует список, только запоминается в дропдауне
    let role = RwSignal::new(PLAYER_ROLE_OPTIONS[0].to_string());
    let role_options: Vec<(String, String)> = PLAYER_ROLE_OPTIONS
        .iter()
        .map(|r| (r.to_string(), r.to_string()))
        .collect();

    view! {
        <PageHeader
            title="Player Mind Lab"
            subtitle="A deep-dive library of players’ mental and tactical profiles. See the game from their perspective."
        />

        <div class="page__panel page__panel--toolbar">
            <div class="search-field">
                {icon("search")}
                <Input placeholder="Search by Player Name..." class="search-field__input" />
            </div>
            <Select
                id="mind-lab-role"
                value=role
                options=role_options
                on_change=Callback::new(move |raw: String| role.set(raw))
            />
        </div>

        <div class="grid grid--4">
            {catalog::player_profiles()
                .iter()
                .enumerate()
                .map(|(i, player)| view! { <ProfileCard player=player delay_ms=stagger_delay(i) /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProfileCard(player: &'static PlayerProfile, delay_ms: u32) -> impl IntoView {
    view! {
        <div class="profile-card" on:click=move |_| open_profile(player)>
            <CardAnimated delay_ms=delay_ms class="card--interactive">
                <span class="accent">{icon("brain")}</span>
                <h3 class="profile-card__name">{player.name}</h3>
                <p class="profile-card__role">{format!("{} • {}", player.role, player.team)}</p>
                <p class="profile-card__perception">
                    <span class="accent">">"</span>
                    " "
                    {player.perception}
                </p>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        open_profile(player);
                    })
                >
                    "Open Mind Profile"
                </Button>
            </CardAnimated>
        </div>
    }
}
