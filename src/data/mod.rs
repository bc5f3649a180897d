//! External game data
//!
//! Settings loaded from RON files under `assets/`.

pub mod loader;

pub use loader::{Settings, SettingsError, SETTINGS_PATH};
