//! Navigation bar wiring, color themes and page translations for a static
//! site, driven against an in-memory page model.

pub mod config;
pub mod i18n;
pub mod listeners;
pub mod page;
pub mod selectors;
pub mod session;
pub mod theme;
