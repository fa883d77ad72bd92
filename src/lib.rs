//! Locale resolution, persistence and translation tables for the settings screen.

pub mod config;
pub mod i18n;
pub mod server;
