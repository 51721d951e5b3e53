pub mod bottom_bar;
pub mod footer;

pub use bottom_bar::BottomBar;
pub use footer::Footer;
