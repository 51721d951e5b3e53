use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::content_card::ContentCard;
use crate::shared::components::ui::{Button, Input, Tag};
use crate::shared::components::video_thumbnail::VideoThumbnail;
use crate::shared::icons::icon;
use contracts::domain::catalog::{self, Pillar, PlayerSnapshot};
use contracts::enums::PageId;
use leptos::prelude::*;

fn go(ctx: AppGlobalContext, page: PageId) -> Callback<leptos::ev::MouseEvent> {
    Callback::new(move |_| ctx.navigate(page))
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <section class="home__section">
            <FeaturedBreakdownCard />
        </section>
        <LatestInsights />
        <MindLabPreview />
        <MomentumPreview />
        <CorePhilosophy />
        <StudioStrip />
        <InnerCircleSignup />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="hero">
            <h1 class="hero__title">
                "We don’t just watch cricket. "
                <span class="accent">"We perceive it."</span>
            </h1>
            <p class="hero__lead">
                "Deep tactical, psychological, and momentum-based analysis explained in human language."
            </p>
            <div class="hero__actions">
                <Button on_click=go(ctx, PageId::MatchInsights)>
                    "Explore Latest Match Insights"
                </Button>
                <Button variant="secondary" icon="brain" on_click=go(ctx, PageId::PlayerMindLab)>
                    "Discover Player Mind Lab"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn FeaturedBreakdownCard() -> impl IntoView {
    let ctx = use_app_context();
    let featured = catalog::featured_breakdown();

    view! {
        <div class="featured">
            <p class="featured__kicker">{featured.kicker}</p>
            <h2 class="featured__title">
                {featured.headline}
                <br />
                {featured.subheadline}
            </h2>
            <div class="tag-list">
                {featured
                    .tags
                    .iter()
                    .enumerate()
                    // Первый тег — главный, подсвечен
                    .map(|(i, tag)| view! { <Tag accent={i == 0}>{*tag}</Tag> })
                    .collect_view()}
            </div>
            <p class="featured__summary">{featured.summary}</p>
            <div class="featured__actions">
                <Button trailing_icon="clock" on_click=go(ctx, PageId::MatchInsights)>
                    {format!("Read Full Breakdown ({} min)", featured.read_time_min)}
                </Button>
                <Button variant="secondary" icon="video" on_click=go(ctx, PageId::VideoHub)>
                    "Watch Video Breakdown"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn LatestInsights() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home__section">
            <h2 class="section-title section-title--ruled">"Latest Insights"</h2>
            <div class="grid grid--4">
                {catalog::home_insights()
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <ContentCard
                                title=item.title
                                teaser=item.teaser
                                tags=item.tags
                                kind=item.kind
                                delay_ms=stagger_delay(i)
                                on_open=Callback::new(move |_| ctx.navigate(PageId::MatchInsights))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PlayerSnapshotCard(player: &'static PlayerSnapshot) -> impl IntoView {
    view! {
        <div class="snapshot">
            <h4 class="snapshot__name">{player.name}</h4>
            <p class="snapshot__role">{player.role}</p>
            <p class="snapshot__quote">{format!("\"{}\"", player.snapshot)}</p>
            <Button variant="secondary" icon="brain">
                "Open Profile"
            </Button>
        </div>
    }
}

#[component]
fn MindLabPreview() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home__section">
            <h2 class="section-title">"Player Mind Lab"</h2>
            <p class="section-lead">
                "Deconstructing the psychological blueprints of the world's best. Their thought processes, risk patterns, and confidence triggers."
            </p>
            <div class="snapshot-strip">
                {catalog::player_snapshots()
                    .iter()
                    .map(|player| view! { <PlayerSnapshotCard player=player /> })
                    .collect_view()}
                <div class="snapshot snapshot--more">
                    <Button variant="secondary" on_click=go(ctx, PageId::PlayerMindLab)>
                        "View All >"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MomentumPreview() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home__section home__section--boxed">
            <h2 class="section-title">"Momentum Lab"</h2>
            <p class="section-lead">
                "Momentum is not just scoring runs. It's the psychological energy shift. We track it with granular precision."
            </p>
            <div class="momentum-track">
                <span class="momentum-track__end">"Over 1"</span>
                <div class="momentum-track__line">
                    {catalog::momentum_spikes()
                        .iter()
                        .map(|spike| {
                            view! {
                                <div
                                    class=format!("momentum-spike momentum-spike--{}", spike.momentum.css_modifier())
                                    style=format!("left: {}%;", spike.position_pct)
                                    title=spike.label
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="momentum-track__end">"Over 50"</span>
            </div>
            <p class="muted italic">
                "Click on a spike in the full Lab to read the precise narrative: \"This over didn't look big, but it broke the bowling rhythm.\""
            </p>
            <div class="home__section-actions">
                <Button variant="secondary" icon="zap" on_click=go(ctx, PageId::MomentumLab)>
                    "See Full Momentum Breakdown"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn PillarCard(pillar: &'static Pillar) -> impl IntoView {
    view! {
        <CardAnimated>
            <span class="accent">{icon(pillar.icon)}</span>
            <h3 class="pillar__title">{pillar.title}</h3>
            <p class="muted">{pillar.body}</p>
        </CardAnimated>
    }
}

#[component]
fn CorePhilosophy() -> impl IntoView {
    view! {
        <section class="home__section">
            <h2 class="section-title section-title--center">"Our Core Philosophy"</h2>
            <div class="grid grid--4">
                {catalog::core_pillars()
                    .iter()
                    .map(|pillar| view! { <PillarCard pillar=pillar /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StudioStrip() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home__section">
            <h2 class="section-title">"Video Hub: Tactical Studio"</h2>
            <div class="grid grid--3">
                {catalog::studio_videos()
                    .iter()
                    .map(|video| view! { <VideoThumbnail video=video /> })
                    .collect_view()}
            </div>
            <div class="home__section-actions home__section-actions--center">
                <Button variant="secondary" icon="video" on_click=go(ctx, PageId::VideoHub)>
                    "View All Videos"
                </Button>
            </div>
        </section>
    }
}

/// Newsletter box. Decorative: the address is not collected.
#[component]
fn InnerCircleSignup() -> impl IntoView {
    view! {
        <section class="home__section home__section--boxed home__section--center">
            <h2 class="section-title accent">"Join The Inner Circle"</h2>
            <p class="section-lead">
                "Access our unpublished thoughts, deeper tactical threads, and submit match moments you want explained by the Perceivers team."
            </p>
            <form class="signup" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <Input input_type="email" placeholder="Enter your email address..." />
                <Button button_type="submit">"Join The Perceivers’ List"</Button>
            </form>
        </section>
    }
}
