//! Procedural map generation
//!
//! Rectangular rooms joined by L-shaped tunnels. Parameters are validated up
//! front so that every random draw made during placement has a non-empty range.

pub mod rooms;
pub mod tunnel;

pub use rooms::{generate_dungeon, place_rooms, RectangularRoom};
pub use tunnel::{tunnel_between, Bresenham};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters for one dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Placement attempts, not guaranteed rooms
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub map_width: i32,
    pub map_height: i32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
            map_width: 80,
            map_height: 45,
        }
    }
}

/// A parameter combination that makes room placement impossible
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("map must have positive dimensions, got {width}x{height}")]
    EmptyMap { width: i32, height: i32 },

    #[error("map of {width}x{height} has more cells than can be indexed")]
    MapTooLarge { width: i32, height: i32 },

    #[error("room_min_size must be at least 2 to leave an interior, got {min}")]
    RoomTooSmall { min: i32 },

    #[error("room_min_size ({min}) is larger than room_max_size ({max})")]
    RoomSizeInverted { min: i32, max: i32 },

    #[error("room_max_size ({max}) must be smaller than the map ({width}x{height})")]
    RoomTooLarge { max: i32, width: i32, height: i32 },
}

/// Errors raised by the dungeon generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid dungeon configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

impl DungeonConfig {
    /// Check that rooms of every allowed size fit inside the map with a 1-cell margin
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width <= 0 || self.map_height <= 0 {
            return Err(ConfigError::EmptyMap {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.map_width.checked_mul(self.map_height).is_none() {
            return Err(ConfigError::MapTooLarge {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.room_min_size < 2 {
            return Err(ConfigError::RoomTooSmall { min: self.room_min_size });
        }
        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::RoomSizeInverted {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.room_max_size >= self.map_width || self.room_max_size >= self.map_height {
            return Err(ConfigError::RoomTooLarge {
                max: self.room_max_size,
                width: self.map_width,
                height: self.map_height,
            });
        }
        Ok(())
    }
}
