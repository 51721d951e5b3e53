pub mod brand;
pub mod forms;
pub mod navigation;

pub use navigation::{NavigationOutcome, NavigationState};
