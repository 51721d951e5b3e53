use super::models::*;
use crate::domain::insight::Insight;
use crate::enums::{ContentKind, MatchFormat};
use once_cell::sync::Lazy;

const HOME_INSIGHTS: [CardItem; 4] = [
    CardItem {
        title: "The over where India actually lost it",
        teaser: "It wasn't the collapse, it was the over immediately preceding it. The fatigue was visible.",
        tags: &["Momentum Shift", "Psychology"],
        kind: ContentKind::Article,
    },
    CardItem {
        title: "Why the slower ball keeps beating Surya",
        teaser: "We break down his pre-shot routine and why the deception window is too large against certain release points.",
        tags: &["Player", "Tactics"],
        kind: ContentKind::Video,
    },
    CardItem {
        title: "The field trap that didn’t look like a trap",
        teaser: "A deep dive into the Captain's Room: the geometry of the off-side field and the planned single.",
        tags: &["Captaincy", "Tactics"],
        kind: ContentKind::Article,
    },
    CardItem {
        title: "Reverse Pressure: How a non-striker can impact the bowler",
        teaser: "The hidden communication and tempo control used by elite non-strikers.",
        tags: &["Psychology"],
        kind: ContentKind::Thread,
    },
];

static MATCH_INSIGHTS: Lazy<Vec<Insight>> = Lazy::new(|| {
    vec![
        Insight::new(
            1,
            "The hidden reasons behind India’s chase collapse",
            MatchFormat::Odi,
            "India",
            &["Collapse", "Psychology"],
        )
        .with_read_time(10),
        Insight::new(
            2,
            "How one spell built an invisible wall",
            MatchFormat::Test,
            "Aus",
            &["Momentum Shift", "Pitch"],
        )
        .with_read_time(14),
        Insight::new(
            3,
            "Captaincy Masterclass: The first 10 overs of the 4th Innings",
            MatchFormat::Test,
            "Eng",
            &["Captaincy", "Tactics"],
        )
        .with_read_time(8),
        Insight::new(
            4,
            "Why this chase looked under control — but wasn’t",
            MatchFormat::T20,
            "WI",
            &["Momentum Shift"],
        )
        .with_read_time(7),
    ]
});

const FEATURED: FeaturedBreakdown = FeaturedBreakdown {
    kicker: "Featured Breakdown",
    headline: "The field trap that didn’t look like a trap:",
    subheadline: "How one over changed everything in the Final.",
    tags: &["Momentum Shift", "Captaincy", "Psychology", "Pitch Behavior"],
    summary: "In the 32nd over of the second innings, the field placement looked passive. But it was a calculated risk that forced the batter to play against their natural tempo, setting up a dismissal two overs later. We break down the invisible strategy.",
    read_time_min: 12,
};

const PLAYER_SNAPSHOTS: [PlayerSnapshot; 4] = [
    PlayerSnapshot {
        name: "S. Khan",
        role: "Finisher / Middle Order",
        snapshot: "Instinct-driven, hates losing tempo. Uses anticipation over pure reaction.",
    },
    PlayerSnapshot {
        name: "A. Patel",
        role: "Off-Spinner / All Rounder",
        snapshot: "Treats every ball like a mini-battle. Highly sensitive to pitch wear.",
    },
    PlayerSnapshot {
        name: "J. Sharma",
        role: "Fast Bowler / Spearhead",
        snapshot: "A clear pattern of setting up the batter with the third ball. Prefers control to raw pace.",
    },
    PlayerSnapshot {
        name: "L. Kallis",
        role: "Opening Batter",
        snapshot: "Hyper-aware of the clock and required run rate. Never trusts a good start.",
    },
];

const PLAYER_PROFILES: [PlayerProfile; 4] = [
    PlayerProfile {
        name: "Virat Kohli",
        team: "India",
        role: "Top-Order Batter",
        perception: "The chase master. Treats required run rate as a personal challenge. Rarely panics, often accelerates subtly.",
    },
    PlayerProfile {
        name: "Kagiso Rabada",
        team: "SA",
        role: "Fast Bowler",
        perception: "Relies on rhythm and aggression. Can be exposed if forced to defend or change pace too often. Elite setup bowler.",
    },
    PlayerProfile {
        name: "Ben Stokes",
        team: "Eng",
        role: "All Rounder/Captain",
        perception: "Driven by narrative. Performs best when cornered. Emotional leader, but tactical risks are often measured.",
    },
    PlayerProfile {
        name: "Rishabh Pant",
        team: "India",
        role: "Wicketkeeper/Batter",
        perception: "High-risk instinct player, thrives on chaos. Hates drag in tempo. The most unpredictable risk pattern in the game.",
    },
];

/// Decorative role dropdown on the Player Mind Lab page.
pub const PLAYER_ROLE_OPTIONS: [&str; 4] =
    ["Filter by Role", "Opener", "Finisher", "Death Bowler"];

const MASTERCLASSES: [Masterclass; 3] = [
    Masterclass {
        title: "The Art of the Strategic Maiden: Field Placement vs. Run Rate Pressure",
        tags: &["Fielding", "T20"],
        read_time_min: 11,
    },
    Masterclass {
        title: "Review Decisions: When the Captain Trusts the Bowler vs. The Keeper",
        tags: &["Decision Making", "Psychology"],
        read_time_min: 9,
    },
    Masterclass {
        title: "Bowling Changes: The 5-Over Rule and Why Captains Break It",
        tags: &["Bowling", "ODI"],
        read_time_min: 15,
    },
];

const MOMENTUM_EVENTS: [MomentumEvent; 4] = [
    MomentumEvent {
        over: "Over 6.2",
        narrative: "Boundary Burst: Three fours in four balls. This shifted the pressure back entirely onto the new bowler and elevated the batter’s confidence index by +15 points.",
        momentum: Momentum::Up,
    },
    MomentumEvent {
        over: "Over 14.6",
        narrative: "Clutch Wicket: A strategic maiden followed by a tight dot-ball setup and a soft dismissal. The psychological energy of the fielding side spiked, breaking the scoring rhythm.",
        momentum: Momentum::Down,
    },
    MomentumEvent {
        over: "Over 25.1",
        narrative: "Strategic Maiden: A defensive field placement used not to save runs, but to force the set batter to watch the ball for 6 deliveries, introducing doubt.",
        momentum: Momentum::Flat,
    },
    MomentumEvent {
        over: "Over 35.5",
        narrative: "Body Language Shift: Batter A took a long time to mark guard after a dropped catch. The fielders noticed and their energy lifted, anticipating the next mistake.",
        momentum: Momentum::Up,
    },
];

const MOMENTUM_SPIKES: [MomentumSpike; 3] = [
    MomentumSpike {
        position_pct: 0,
        momentum: Momentum::Down,
        label: "Momentum Spike: Collapse Trigger (Wicket)",
    },
    MomentumSpike {
        position_pct: 30,
        momentum: Momentum::Up,
        label: "Momentum Spike: Control Established (Boundary Burst)",
    },
    MomentumSpike {
        position_pct: 70,
        momentum: Momentum::Flat,
        label: "Momentum Spike: The Strategic Maiden",
    },
];

const TACTICAL_CONCEPTS: [TacticalConcept; 4] = [
    TacticalConcept {
        title: "The Setup Over",
        definition: "A bowler sacrifices 4-6 runs to ensure the perfect dismissal ball is bowled in the next over.",
        tags: &["Evergreen", "Bowler"],
    },
    TacticalConcept {
        title: "Reverse Pressure",
        definition: "The psychological technique of a non-striker to interrupt the bowler's rhythm or focus by controlling the tempo between balls.",
        tags: &["Psychology", "Batting"],
    },
    TacticalConcept {
        title: "Angle Manipulation",
        definition: "Using the crease (wide/close) and wrist position to make the batter play for a line that isn't delivered.",
        tags: &["Bowler", "Tactics"],
    },
    TacticalConcept {
        title: "Double Bluff Field",
        definition: "Setting a highly aggressive field to bluff the batter into believing the ball will be short, only to bowl a full delivery.",
        tags: &["Captaincy", "Fielding"],
    },
];

const VIDEOS: [Video; 4] = [
    Video {
        title: "Full Match Breakdown: The 2019 Final — The Psychological Toll of a Tie",
        category: VideoCategory::FullMatchBreakdowns,
        duration: "45:30",
    },
    Video {
        title: "Player Mind Episode: Rohit Sharma's Initial 10 Balls Strategy",
        category: VideoCategory::PlayerMindEpisodes,
        duration: "12:05",
    },
    Video {
        title: "Captaincy Session: Setting the Field for a Reverse-Swing Master",
        category: VideoCategory::CaptaincySessions,
        duration: "20:18",
    },
    Video {
        title: "Momentum Story: How a single six broke the bowlers' resolve",
        category: VideoCategory::MomentumStories,
        duration: "7:40",
    },
];

const STUDIO_VIDEOS: [Video; 3] = [
    Video {
        title: "The unseen wrist flick that generates spin",
        category: VideoCategory::Studio,
        duration: "8:30",
    },
    Video {
        title: "Captaincy 101: Field geometry vs. batter psychology",
        category: VideoCategory::Studio,
        duration: "15:12",
    },
    Video {
        title: "The 'Energy Over' and how to spot it",
        category: VideoCategory::Studio,
        duration: "6:45",
    },
];

/// Полки Video Hub: заголовок и категории, попадающие на полку
pub const VIDEO_SHELVES: [(&str, &[VideoCategory]); 2] = [
    ("Full Match Breakdowns", &[VideoCategory::FullMatchBreakdowns]),
    (
        "Player Mind Episodes & Captaincy Sessions",
        &[
            VideoCategory::PlayerMindEpisodes,
            VideoCategory::CaptaincySessions,
        ],
    ),
];

const COMMUNITY_THREADS: [CommunityThread; 2] = [
    CommunityThread {
        title: "Thread: Why is the off-stump guard becoming obsolete?",
        replies: 45,
        last_update: "2h ago",
    },
    CommunityThread {
        title: "Question: Analyzing the short ball setup to a tail-ender.",
        replies: 12,
        last_update: "1 day ago",
    },
];

const CORE_PILLARS: [Pillar; 4] = [
    Pillar {
        icon: "target",
        title: "Tactical Depth",
        body: "Complex strategies explained simply. No dumbing down, just clarity.",
    },
    Pillar {
        icon: "target",
        title: "Respect & Ruthlessness",
        body: "Respect for players, ruthless critique of decisions. We separate the person from the choice.",
    },
    Pillar {
        icon: "target",
        title: "Insider Understanding",
        body: "Designed for fans who feel the game. We give language to your intuition.",
    },
    Pillar {
        icon: "target",
        title: "Ground-Level Experience",
        body: "Analysis informed by actual coaching and player perspectives, not just armchairs.",
    },
];

const PHILOSOPHY_PILLARS: [Pillar; 3] = [
    Pillar {
        icon: "feather",
        title: "Respect Players, Question Decisions",
        body: "Our core rule. We will be blunt about a tactical error, but never about a person’s intent, character, or skill. We separate the game from the player.",
    },
    Pillar {
        icon: "brain",
        title: "The Human Factor is the Strategy",
        body: "We focus on player psychology, captaincy pressure, and momentum shifts. The game is played by people, and understanding their state of mind is the ultimate tactic.",
    },
    Pillar {
        icon: "target",
        title: "Observational Depth",
        body: "We spend hours dissecting five overs to find the single delivery or field change that defined the entire session. We find the hidden traps and setups.",
    },
];

pub const ORIGIN_STORY: &str = "The Cricket Perceivers was founded out of frustration. Frustration that the deep, nuanced, psychological chess match happening on the field was being ignored for simple scorecards and surface-level narratives. We are a collective of former players, coaches, and obsessive analysts who believe the 'why' is always more interesting than the 'what'.";

const INQUIRY_TYPES: [&str; 4] = [
    "General Inquiry",
    "Media Partnership",
    "Sponsorship/Advertising",
    "Content Collaboration",
];

pub fn home_insights() -> &'static [CardItem] {
    &HOME_INSIGHTS
}

pub fn match_insights() -> &'static [Insight] {
    MATCH_INSIGHTS.as_slice()
}

pub fn featured_breakdown() -> &'static FeaturedBreakdown {
    &FEATURED
}

pub fn player_snapshots() -> &'static [PlayerSnapshot] {
    &PLAYER_SNAPSHOTS
}

pub fn player_profiles() -> &'static [PlayerProfile] {
    &PLAYER_PROFILES
}

pub fn masterclasses() -> &'static [Masterclass] {
    &MASTERCLASSES
}

pub fn momentum_events() -> &'static [MomentumEvent] {
    &MOMENTUM_EVENTS
}

pub fn momentum_spikes() -> &'static [MomentumSpike] {
    &MOMENTUM_SPIKES
}

pub fn tactical_concepts() -> &'static [TacticalConcept] {
    &TACTICAL_CONCEPTS
}

pub fn videos() -> &'static [Video] {
    &VIDEOS
}

pub fn studio_videos() -> &'static [Video] {
    &STUDIO_VIDEOS
}

/// Videos whose category is in `categories`, in catalog order.
pub fn videos_in(categories: &[VideoCategory]) -> Vec<&'static Video> {
    VIDEOS
        .iter()
        .filter(|v| categories.contains(&v.category))
        .collect()
}

pub fn community_threads() -> &'static [CommunityThread] {
    &COMMUNITY_THREADS
}

pub fn core_pillars() -> &'static [Pillar] {
    &CORE_PILLARS
}

pub fn philosophy_pillars() -> &'static [Pillar] {
    &PHILOSOPHY_PILLARS
}

pub fn inquiry_types() -> &'static [&'static str] {
    &INQUIRY_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight_filter::THEME_TAGS;
    use std::collections::HashSet;

    #[test]
    fn test_match_insight_ids_are_unique() {
        let ids: HashSet<u32> = match_insights().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), match_insights().len());
    }

    #[test]
    fn test_every_match_insight_is_reachable_by_a_theme() {
        for insight in match_insights() {
            assert!(
                insight.tags.iter().any(|t| THEME_TAGS.contains(&t.as_str())),
                "{} has no filterable theme",
                insight.title
            );
        }
    }

    #[test]
    fn test_video_shelves() {
        let (_, first) = VIDEO_SHELVES[0];
        let full: Vec<&str> = videos_in(first).iter().map(|v| v.duration).collect();
        assert_eq!(full, vec!["45:30"]);

        let (_, second) = VIDEO_SHELVES[1];
        let mind_and_captaincy: Vec<VideoCategory> =
            videos_in(second).iter().map(|v| v.category).collect();
        assert_eq!(
            mind_and_captaincy,
            vec![
                VideoCategory::PlayerMindEpisodes,
                VideoCategory::CaptaincySessions
            ]
        );
    }

    #[test]
    fn test_momentum_narrative_split() {
        let event = &momentum_events()[0];
        assert_eq!(event.headline(), "Boundary Burst");
        assert!(event.body().starts_with("Three fours in four balls."));

        let bare = MomentumEvent {
            over: "Over 1.1",
            narrative: "Dot ball",
            momentum: Momentum::Flat,
        };
        assert_eq!(bare.headline(), "Dot ball");
        assert_eq!(bare.body(), "");
    }

    #[test]
    fn test_thread_meta_line() {
        assert_eq!(
            community_threads()[0].meta_line(),
            "45 replies • Last update 2h ago"
        );
    }
}
