//! Статический каталог контента сайта.
//!
//! Все данные неизменяемы и создаются один раз за время жизни страницы.

mod data;
pub mod models;

pub use data::*;
pub use models::*;
