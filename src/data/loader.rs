//! RON settings loader
//!
//! Loads game settings from an external RON file, with fallback to built-in
//! defaults. Missing fields take their default values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::DEFAULT_FOV_RADIUS;
use crate::world::DungeonConfig;

/// Where the binary looks for settings
pub const SETTINGS_PATH: &str = "assets/settings.ron";

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: u16,
    pub screen_height: u16,
    pub fov_radius: i32,
    /// Fixed seed for reproducible dungeons; fresh entropy when `None`
    pub seed: Option<u64>,
    pub dungeon: DungeonConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 80,
            screen_height: 50,
            fov_radius: DEFAULT_FOV_RADIUS,
            seed: None,
            dungeon: DungeonConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl Settings {
    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults when the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Random number generator for dungeon generation
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
