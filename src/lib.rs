//! Cryptcrawl - the turn loop and dungeon generator of a terminal dungeon crawler
//!
//! Carve a map of rooms and tunnels, wrap it in an [`Engine`], then feed it
//! input events: each action moves the world along and refreshes what the
//! player can see.

pub mod ecs;
pub mod entities;
pub mod world;
pub mod game;
pub mod render;
pub mod data;

// Re-export commonly used types
pub use data::Settings;
pub use ecs::components::*;
pub use game::{Action, Engine, EventHandler, KeyboardHandler};
pub use render::Presenter;
pub use world::map::Map;
pub use world::generation::{generate_dungeon, tunnel_between, DungeonConfig, RectangularRoom};
