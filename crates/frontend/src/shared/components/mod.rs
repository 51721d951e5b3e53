pub mod card_animated;
pub mod content_card;
pub mod empty_state;
pub mod filter_panel;
pub mod form_ack;
pub mod page_header;
pub mod ui;
pub mod video_thumbnail;
