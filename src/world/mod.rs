//! World module
//!
//! Contains map data structures, tiles, field of view and procedural generation.

pub mod map;
pub mod tile;
pub mod fov;
pub mod generation;

pub use map::Map;
pub use tile::{Graphic, TileType, SHROUD};
pub use fov::compute_fov;
pub use generation::{generate_dungeon, DungeonConfig, GenerationError};
