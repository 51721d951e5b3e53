pub mod match_format;
pub mod page_id;

pub use match_format::{ContentKind, MatchFormat};
pub use page_id::PageId;
