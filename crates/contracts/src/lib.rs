//! Контракты сайта The Cricket Perceivers.
//!
//! Типы и правила, не зависящие от браузера: идентификаторы страниц,
//! состояние навигации, записи контента, фильтр инсайтов и статический каталог.

pub mod domain;
pub mod enums;
pub mod shared;
