//! Boot-time settings for the MuchToDo server.
//!
//! Values resolve from the process environment, then an optional `.env` file in
//! the settings directory, then built-in defaults.
pub mod domain;
pub mod dto;
pub mod logging;
pub mod models;
pub mod services;

pub use domain::{LogFormat, SettingKey};
pub use dto::SettingsSummary;
pub use models::config::Settings;
pub use services::loader::{SettingsLoader, load};
pub use services::{LoadError, LoadResult};
