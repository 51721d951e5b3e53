use crate::enums::ContentKind;

/// Карточка в сетке Latest Insights на главной
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardItem {
    pub title: &'static str,
    pub teaser: &'static str,
    pub tags: &'static [&'static str],
    pub kind: ContentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedBreakdown {
    pub kicker: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
    pub read_time_min: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub name: &'static str,
    pub role: &'static str,
    pub snapshot: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerProfile {
    pub name: &'static str,
    pub team: &'static str,
    pub role: &'static str,
    pub perception: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masterclass {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub read_time_min: u32,
}

/// Direction of a momentum swing, from the batting side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Momentum {
    Up,
    Down,
    Flat,
}

impl Momentum {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Momentum::Up => "up",
            Momentum::Down => "down",
            Momentum::Flat => "flat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MomentumEvent {
    pub over: &'static str,
    /// "Headline: body"
    pub narrative: &'static str,
    pub momentum: Momentum,
}

impl MomentumEvent {
    /// Text before the first `:`, or the whole narrative.
    pub fn headline(&self) -> &'static str {
        self.narrative
            .split_once(':')
            .map(|(head, _)| head)
            .unwrap_or(self.narrative)
    }

    /// Text after the first `": "`; empty when the narrative has no body.
    pub fn body(&self) -> &'static str {
        self.narrative
            .split_once(": ")
            .map(|(_, body)| body)
            .unwrap_or("")
    }
}

/// Маркер на превью Momentum Lab (позиция в процентах от ширины шкалы)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MomentumSpike {
    pub position_pct: u8,
    pub momentum: Momentum,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacticalConcept {
    pub title: &'static str,
    pub definition: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoCategory {
    FullMatchBreakdowns,
    PlayerMindEpisodes,
    CaptaincySessions,
    MomentumStories,
    Studio,
}

impl VideoCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            VideoCategory::FullMatchBreakdowns => "Full Match Breakdowns",
            VideoCategory::PlayerMindEpisodes => "Player Mind Episodes",
            VideoCategory::CaptaincySessions => "Captaincy Sessions",
            VideoCategory::MomentumStories => "Momentum Stories",
            VideoCategory::Studio => "Tactical Studio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub category: VideoCategory,
    /// "mm:ss"
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityThread {
    pub title: &'static str,
    pub replies: u32,
    pub last_update: &'static str,
}

impl CommunityThread {
    pub fn meta_line(&self) -> String {
        format!("{} replies • Last update {}", self.replies, self.last_update)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}
