mod destroyable;
pub mod events;
pub mod game;
pub mod model;
pub mod ui;

fluent_i18n::i18n!("locales", fallback = "en");
