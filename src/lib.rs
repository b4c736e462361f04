//! Translated country names: ISO code tables, a static translation table,
//! and a terminal UI for picking a language and a country.

pub mod app;
pub mod codes;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod resolve;
pub mod translator;
pub mod ui;

pub use codes::{CountryCode, LanguageCode};
pub use models::{load_catalog, Catalog};
pub use resolve::{resolve_and_display, Indexes, Placeholders};
pub use translator::Translator;
