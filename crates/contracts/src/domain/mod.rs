pub mod catalog;
pub mod insight;
pub mod insight_filter;

pub use insight::{Insight, TeamCode};
pub use insight_filter::{InsightFilter, Listing, Selection};
