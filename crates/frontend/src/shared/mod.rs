pub mod browser;
pub mod components;
pub mod icons;
pub mod page_frame;
pub mod theme;
