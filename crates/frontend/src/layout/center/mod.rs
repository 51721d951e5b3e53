//! Центральная зона: активная страница.
//!
//! - `center` - компонент Center
//! - `registry` - маппинг PageId → View (единственный источник правды)

pub mod center;
pub mod registry;

pub use center::Center;
pub use registry::{page_dom_id, render_page};
