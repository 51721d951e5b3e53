//! Страницы сайта, по одному компоненту на `PageId`.

pub mod about;
pub mod captains_room;
pub mod community;
pub mod contact;
pub mod home;
pub mod match_insights;
pub mod momentum_lab;
pub mod player_mind_lab;
pub mod tactical_library;
pub mod video_hub;
